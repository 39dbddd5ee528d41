pub mod feeding;
pub mod formulas;
pub mod selftest;

pub use crate::domain::model::{
    DoughRecipe, EquivalenceRates, EquivalenceRecipe, Mode, Rates, SaltRate, StarterRecipe,
};
pub use crate::domain::ports::{Recipe, SaltRateProvider};
pub use crate::utils::error::Result;
