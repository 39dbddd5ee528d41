use crate::domain::model::SaltRate;
use crate::utils::error::{LevainError, Result};

/// Source of the salt rate used by the formulas.
pub trait SaltRateProvider {
    fn salt_rate(&self) -> SaltRate;
}

/// Common view over the results of the formulas.
pub trait Recipe {
    fn water(&self) -> f64;

    /// Labelled weights, salt excluded.
    fn weights(&self) -> Vec<(&'static str, f64)>;

    fn salt(&self) -> f64;

    /// A negative water weight means the rates cannot be combined.
    fn is_feasible(&self) -> bool {
        self.water() >= 0.0
    }

    fn ensure_feasible(&self) -> Result<()> {
        if self.is_feasible() {
            Ok(())
        } else {
            Err(LevainError::IncompatibleHydration)
        }
    }
}
