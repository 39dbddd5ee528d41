pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::app::render::OutputFormat;
pub use crate::app::session::{Outcome, Presets, Session};
pub use crate::config::settings::Settings;
pub use crate::core::formulas::Formulas;
pub use crate::domain::model::{
    DoughRecipe, EquivalenceRates, EquivalenceRecipe, Mode, Rates, SaltRate, StarterRecipe,
};
pub use crate::utils::error::{LevainError, Result};
