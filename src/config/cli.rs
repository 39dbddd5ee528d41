use crate::app::render::OutputFormat;
use crate::app::session::Presets;
use crate::config::settings::Settings;
use crate::core::feeding::MAX_FEEDING_STEPS;
use crate::domain::model::Mode;
use crate::utils::error::Result;
use crate::utils::validation::{validate_percentage, validate_positive, validate_range, Validate};
use chrono::NaiveDate;
use clap::{ArgGroup, Parser};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "levain")]
#[command(about = "Sourdough bread calculations: flour, water, starter and salt weights")]
#[command(group(
    ArgGroup::new("mode").args(["pate", "levain", "equivalence", "iteratif", "test"])
))]
pub struct CliConfig {
    /// Dough weight fixed: compute flour, water, starter and salt
    #[arg(short, long)]
    pub pate: bool,

    /// Starter weight fixed: compute flour, water, dough and salt
    #[arg(short, long)]
    pub levain: bool,

    /// Turn part of a flour/water mix into starter
    #[arg(short, long)]
    pub equivalence: bool,

    /// Feed the starter day after day with the previous dough
    #[arg(short, long)]
    pub iteratif: bool,

    /// Run the built-in worked examples
    #[arg(short, long)]
    pub test: bool,

    /// Path to the configuration file (defaults to config.ini next to the executable)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Result format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Dough weight (-p) or starter weight (-l, -i), in grams
    #[arg(long)]
    pub weight: Option<f64>,

    /// Flour weight for the equivalence, in grams
    #[arg(long)]
    pub flour: Option<f64>,

    /// Water weight for the equivalence, in grams
    #[arg(long)]
    pub water: Option<f64>,

    /// Dough hydration, in percent
    #[arg(long)]
    pub dough_hydration: Option<f64>,

    /// Starter hydration, in percent
    #[arg(long)]
    pub starter_hydration: Option<f64>,

    /// Starter flour to dough flour ratio, in percent
    #[arg(long)]
    pub starter_ratio: Option<f64>,

    /// Number of feeding days for the iterative mode
    #[arg(long)]
    pub steps: Option<u32>,

    /// First feeding day (YYYY-MM-DD), today by default
    #[arg(long)]
    pub start_date: Option<NaiveDate>,
}

impl CliConfig {
    pub fn mode(&self) -> Option<Mode> {
        if self.pate {
            Some(Mode::DoughWeight)
        } else if self.levain {
            Some(Mode::StarterWeight)
        } else if self.equivalence {
            Some(Mode::Equivalence)
        } else if self.iteratif {
            Some(Mode::Feeding)
        } else {
            None
        }
    }

    pub fn presets(&self) -> Presets {
        Presets {
            weight: self.weight,
            flour: self.flour,
            water: self.water,
            dough_hydration: self.dough_hydration,
            starter_hydration: self.starter_hydration,
            starter_ratio: self.starter_ratio,
            steps: self.steps,
            start_date: self.start_date,
        }
    }

    /// A mode was chosen and every value it needs came from the command line.
    pub fn is_scripted(&self) -> bool {
        self.mode()
            .map(|mode| self.presets().covers(mode))
            .unwrap_or(false)
    }

    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Settings::default_path)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("weight", self.weight),
            ("flour", self.flour),
            ("water", self.water),
        ] {
            if let Some(value) = value {
                validate_positive(field, value)?;
            }
        }

        for (field, value) in [
            ("dough-hydration", self.dough_hydration),
            ("starter-hydration", self.starter_hydration),
            ("starter-ratio", self.starter_ratio),
        ] {
            if let Some(value) = value {
                validate_percentage(field, value)?;
            }
        }

        if let Some(steps) = self.steps {
            validate_range("steps", steps, 1, MAX_FEEDING_STEPS)?;
        }

        Ok(())
    }
}
