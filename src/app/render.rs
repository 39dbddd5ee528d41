use crate::core::feeding::FeedingSchedule;
use crate::domain::model::SaltRate;
use crate::domain::ports::Recipe;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

pub const INCOMPATIBLE_MESSAGE: &str = "Incompatible hydration rates";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

pub fn render_recipe<W, T>(out: &mut W, recipe: &T, salt_rate: SaltRate, format: OutputFormat) -> Result<()>
where
    W: Write,
    T: Recipe + Serialize,
{
    match format {
        OutputFormat::Text => {
            writeln!(out)?;
            for (label, weight) in recipe.weights() {
                writeln!(out, "{}: {:.1}", label, weight)?;
            }
            writeln!(
                out,
                "Salt weight ({}% of total flour): {:.1}",
                salt_rate.percent(),
                recipe.salt()
            )?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, recipe)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(&mut *out);
            writer.serialize(recipe)?;
            writer.flush()?;
        }
    }
    Ok(())
}

pub fn render_schedule<W: Write>(
    out: &mut W,
    schedule: &FeedingSchedule,
    salt_rate: SaltRate,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out)?;
            for step in &schedule.steps {
                writeln!(
                    out,
                    "Day {} ({}): starter {:.1}, flour {:.1}, water {:.1}, dough {:.1}, salt {:.1}",
                    step.day, step.date, step.starter, step.flour, step.water, step.dough, step.salt
                )?;
            }
            if !schedule.steps.is_empty() {
                writeln!(out, "Salt is {}% of total flour", salt_rate.percent())?;
            }
            if let Some(day) = schedule.stopped_at {
                writeln!(out, "{} on day {}", INCOMPATIBLE_MESSAGE, day)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, schedule)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(&mut *out);
            for step in &schedule.steps {
                writer.serialize(step)?;
            }
            writer.flush()?;
        }
    }
    Ok(())
}

pub fn render_incompatible<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", INCOMPATIBLE_MESSAGE)?;
    Ok(())
}
