//! Closed-form recipe formulas.
//!
//! Three framings of the same mass balance: dough weight fixed, starter
//! weight fixed, or an existing flour/water mix to be partly turned into
//! starter. Results are rounded to one decimal; intermediate values keep
//! full precision. Incompatible rates show up as a negative water weight,
//! which callers check with [`Recipe::ensure_feasible`].
//!
//! [`Recipe::ensure_feasible`]: crate::domain::ports::Recipe::ensure_feasible

use crate::domain::model::{
    DoughRecipe, EquivalenceRates, EquivalenceRecipe, Rates, SaltRate, StarterRecipe,
};
use crate::domain::ports::SaltRateProvider;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Formulas {
    salt_rate: SaltRate,
}

impl Formulas {
    pub fn new(salt_rate: SaltRate) -> Self {
        Self { salt_rate }
    }

    pub fn from_provider<P: SaltRateProvider>(provider: &P) -> Self {
        Self::new(provider.salt_rate())
    }

    pub fn salt_rate(&self) -> SaltRate {
        self.salt_rate
    }

    /// Flour, water, starter and salt for a target dough weight.
    pub fn compute_from_dough_weight(&self, target_dough_weight: f64, rates: &Rates) -> DoughRecipe {
        let starter_flour = (target_dough_weight * rates.starter_flour_rate)
            / (1.0 + rates.starter_flour_rate)
            / (1.0 + rates.dough_hydration);
        let (flour, water, salt) = self.water_flour_salt(rates, starter_flour);
        let starter = (1.0 + rates.starter_hydration) * starter_flour;

        tracing::debug!(
            target_dough_weight,
            starter_flour,
            flour,
            water,
            starter,
            salt,
            "computed recipe from dough weight"
        );

        DoughRecipe {
            flour: round1(flour),
            water: round1(water),
            starter: round1(starter),
            salt: round1(salt),
        }
    }

    /// Flour, water, resulting dough and salt for a given starter weight.
    pub fn compute_from_starter_weight(&self, starter_weight: f64, rates: &Rates) -> StarterRecipe {
        let starter_flour = starter_weight / (1.0 + rates.starter_hydration);
        let (flour, water, salt) = self.water_flour_salt(rates, starter_flour);
        let dough = starter_weight + flour + water;

        tracing::debug!(
            starter_weight,
            starter_flour,
            flour,
            water,
            dough,
            salt,
            "computed recipe from starter weight"
        );

        StarterRecipe {
            flour: round1(flour),
            water: round1(water),
            dough: round1(dough),
            salt: round1(salt),
        }
    }

    /// Moves part of a flour/water mix into a starter with the given hydration
    /// and ratio. The total mass of the mix is preserved.
    pub fn compute_equivalence(
        &self,
        flour_weight: f64,
        water_weight: f64,
        rates: &EquivalenceRates,
    ) -> EquivalenceRecipe {
        let rate = rates.starter_flour_rate;
        let hydration = rates.starter_hydration;

        let flour = flour_weight / (1.0 + rate / (1.0 + 1.0 / hydration));
        let water = water_weight - flour_weight * rate / (1.0 + (1.0 + rate) * hydration);
        let starter = flour * rate;
        let salt = flour_weight * self.salt_rate.value();

        tracing::debug!(
            flour_weight,
            water_weight,
            flour,
            water,
            starter,
            salt,
            "computed flour/water equivalence"
        );

        EquivalenceRecipe {
            flour: round1(flour),
            water: round1(water),
            starter: round1(starter),
            salt: round1(salt),
        }
    }

    // Dough flour and water from the flour carried by the starter; salt on total flour.
    fn water_flour_salt(&self, rates: &Rates, starter_flour: f64) -> (f64, f64, f64) {
        let flour = starter_flour / rates.starter_flour_rate;
        let water = ((1.0 / rates.starter_flour_rate + 1.0) * rates.dough_hydration
            - rates.starter_hydration)
            * starter_flour;
        let salt = (flour + starter_flour) * self.salt_rate.value();
        (flour, water, salt)
    }
}

pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
