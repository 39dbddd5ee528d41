use crate::domain::ports::Recipe;
use crate::utils::error::{LevainError, Result};
use crate::utils::validation::{validate_fraction, validate_percentage, validate_range};
use serde::{Deserialize, Serialize};

pub const DEFAULT_SALT_RATE: f64 = 0.02;

/// Ratio of salt to total flour (dough flour plus starter flour).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SaltRate(f64);

impl SaltRate {
    pub fn new(rate: f64) -> Result<Self> {
        if !rate.is_finite() {
            return Err(LevainError::InvalidConfigValueError {
                field: "taux_sel".to_string(),
                value: rate.to_string(),
                reason: "Salt rate must be a number".to_string(),
            });
        }
        validate_range("taux_sel", rate, 0.0, 1.0)?;
        Ok(Self(rate))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Rate as a percentage, trimmed to two decimals for display.
    pub fn percent(&self) -> f64 {
        (self.0 * 10_000.0).round() / 100.0
    }
}

impl Default for SaltRate {
    fn default() -> Self {
        Self(DEFAULT_SALT_RATE)
    }
}

/// Hydration and starter ratios, stored as fractions in (0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rates {
    pub dough_hydration: f64,
    pub starter_hydration: f64,
    pub starter_flour_rate: f64,
}

impl Rates {
    pub fn new(dough_hydration: f64, starter_hydration: f64, starter_flour_rate: f64) -> Result<Self> {
        validate_fraction("dough hydration", dough_hydration)?;
        validate_fraction("starter hydration", starter_hydration)?;
        validate_fraction("starter ratio", starter_flour_rate)?;
        Ok(Self {
            dough_hydration,
            starter_hydration,
            starter_flour_rate,
        })
    }

    pub fn from_percentages(dough_hydration: f64, starter_hydration: f64, starter_ratio: f64) -> Result<Self> {
        validate_percentage("dough hydration", dough_hydration)?;
        validate_percentage("starter hydration", starter_hydration)?;
        validate_percentage("starter ratio", starter_ratio)?;
        Self::new(
            dough_hydration / 100.0,
            starter_hydration / 100.0,
            starter_ratio / 100.0,
        )
    }
}

/// Rates for the equivalence calculation, where the dough hydration is implied
/// by the flour and water weights.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquivalenceRates {
    pub starter_hydration: f64,
    pub starter_flour_rate: f64,
}

impl EquivalenceRates {
    pub fn new(starter_hydration: f64, starter_flour_rate: f64) -> Result<Self> {
        validate_fraction("starter hydration", starter_hydration)?;
        validate_fraction("starter ratio", starter_flour_rate)?;
        Ok(Self {
            starter_hydration,
            starter_flour_rate,
        })
    }

    pub fn from_percentages(starter_hydration: f64, starter_ratio: f64) -> Result<Self> {
        validate_percentage("starter hydration", starter_hydration)?;
        validate_percentage("starter ratio", starter_ratio)?;
        Self::new(starter_hydration / 100.0, starter_ratio / 100.0)
    }
}

/// Weights needed to reach a given dough weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DoughRecipe {
    pub flour: f64,
    pub water: f64,
    pub starter: f64,
    pub salt: f64,
}

/// Weights to add to a given starter weight, and the resulting dough weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StarterRecipe {
    pub flour: f64,
    pub water: f64,
    pub dough: f64,
    pub salt: f64,
}

/// A flour/water mix redistributed into flour, water and starter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquivalenceRecipe {
    pub flour: f64,
    pub water: f64,
    pub starter: f64,
    pub salt: f64,
}

impl Recipe for DoughRecipe {
    fn water(&self) -> f64 {
        self.water
    }

    fn weights(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("Flour weight", self.flour),
            ("Water weight", self.water),
            ("Starter weight", self.starter),
        ]
    }

    fn salt(&self) -> f64 {
        self.salt
    }
}

impl Recipe for StarterRecipe {
    fn water(&self) -> f64 {
        self.water
    }

    fn weights(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("Flour weight", self.flour),
            ("Water weight", self.water),
            ("Dough weight", self.dough),
        ]
    }

    fn salt(&self) -> f64 {
        self.salt
    }
}

impl Recipe for EquivalenceRecipe {
    fn water(&self) -> f64 {
        self.water
    }

    fn weights(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("Flour weight", self.flour),
            ("Water weight", self.water),
            ("Starter weight", self.starter),
        ]
    }

    fn salt(&self) -> f64 {
        self.salt
    }
}

/// Calculation selected from the command line or the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    DoughWeight,
    StarterWeight,
    Equivalence,
    Feeding,
}

impl Mode {
    /// Menu letters: t(otal), l(evain), e(quivalence), i(terative).
    pub fn from_menu_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "t" => Some(Mode::DoughWeight),
            "l" => Some(Mode::StarterWeight),
            "e" => Some(Mode::Equivalence),
            "i" => Some(Mode::Feeding),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rates_from_percentages() {
        let rates = Rates::from_percentages(60.0, 100.0, 30.0).unwrap();
        assert_eq!(rates.dough_hydration, 0.6);
        assert_eq!(rates.starter_hydration, 1.0);
        assert_eq!(rates.starter_flour_rate, 0.3);
    }

    #[test]
    fn test_rates_reject_zero_and_negative() {
        assert!(Rates::from_percentages(0.0, 100.0, 30.0).is_err());
        assert!(Rates::from_percentages(60.0, -5.0, 30.0).is_err());
        assert!(Rates::from_percentages(60.0, 100.0, 0.0).is_err());
        assert!(Rates::new(0.6, 1.0, 1.5).is_err());
        assert!(EquivalenceRates::from_percentages(0.0, 40.0).is_err());
        assert!(EquivalenceRates::from_percentages(70.0, 140.0).is_err());
    }

    #[test]
    fn test_salt_rate() {
        assert_eq!(SaltRate::default().value(), 0.02);
        assert_eq!(SaltRate::default().percent(), 2.0);
        assert_eq!(SaltRate::new(0.07).unwrap().percent(), 7.0);
        assert!(SaltRate::new(-0.01).is_err());
        assert!(SaltRate::new(f64::NAN).is_err());
    }

    #[test]
    fn test_feasibility() {
        let ok = StarterRecipe {
            flour: 400.0,
            water: 200.0,
            dough: 800.0,
            salt: 10.0,
        };
        let ko = StarterRecipe { water: -12.5, ..ok };
        assert!(ok.is_feasible());
        assert!(ok.ensure_feasible().is_ok());
        assert!(!ko.is_feasible());
        assert!(matches!(
            ko.ensure_feasible(),
            Err(LevainError::IncompatibleHydration)
        ));
    }

    #[test]
    fn test_menu_choice() {
        assert_eq!(Mode::from_menu_choice("t"), Some(Mode::DoughWeight));
        assert_eq!(Mode::from_menu_choice(" l\n"), Some(Mode::StarterWeight));
        assert_eq!(Mode::from_menu_choice("e"), Some(Mode::Equivalence));
        assert_eq!(Mode::from_menu_choice("i"), Some(Mode::Feeding));
        assert_eq!(Mode::from_menu_choice("x"), None);
    }
}
