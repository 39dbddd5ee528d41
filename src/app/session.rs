//! One run of the calculator: pick a mode, gather the inputs (from presets or
//! prompts), compute, render.

use crate::app::field::InputField;
use crate::app::prompt::Prompter;
use crate::app::render::{render_incompatible, render_recipe, render_schedule, OutputFormat};
use crate::core::feeding::{feeding_schedule, DEFAULT_FEEDING_STEPS, MAX_FEEDING_STEPS};
use crate::core::formulas::Formulas;
use crate::domain::model::{EquivalenceRates, Mode, Rates};
use crate::domain::ports::Recipe;
use crate::utils::error::{LevainError, Result};
use crate::utils::validation::validate_range;
use chrono::NaiveDate;
use serde::Serialize;
use std::io::{BufRead, Write};

pub const MENU_QUESTION: &str =
    "Dough weight / starter weight / equivalence / iterative (t/l/e/i) : ";

/// Values known before the session starts. Rates are percentages.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Presets {
    pub weight: Option<f64>,
    pub flour: Option<f64>,
    pub water: Option<f64>,
    pub dough_hydration: Option<f64>,
    pub starter_hydration: Option<f64>,
    pub starter_ratio: Option<f64>,
    pub steps: Option<u32>,
    pub start_date: Option<NaiveDate>,
}

impl Presets {
    /// True when `mode` can run without asking anything.
    pub fn covers(&self, mode: Mode) -> bool {
        let rates = self.starter_hydration.is_some() && self.starter_ratio.is_some();
        match mode {
            Mode::DoughWeight | Mode::StarterWeight | Mode::Feeding => {
                self.weight.is_some() && self.dough_hydration.is_some() && rates
            }
            Mode::Equivalence => self.flour.is_some() && self.water.is_some() && rates,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Computed,
    Infeasible,
    /// The menu answer matched no mode.
    NoSelection,
}

pub struct Session<R, W> {
    formulas: Formulas,
    prompter: Prompter<R, W>,
    presets: Presets,
    format: OutputFormat,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(formulas: Formulas, input: R, output: W) -> Self {
        Self {
            formulas,
            prompter: Prompter::new(input, output),
            presets: Presets::default(),
            format: OutputFormat::default(),
        }
    }

    pub fn with_presets(mut self, presets: Presets) -> Self {
        self.presets = presets;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn run(&mut self, mode: Option<Mode>) -> Result<Outcome> {
        let mode = match mode {
            Some(mode) => mode,
            None => match self.choose_mode()? {
                Some(mode) => mode,
                None => return Ok(Outcome::NoSelection),
            },
        };
        tracing::debug!(?mode, "running calculation");

        match mode {
            Mode::DoughWeight => self.dough_weight(),
            Mode::StarterWeight => self.starter_weight(),
            Mode::Equivalence => self.equivalence(),
            Mode::Feeding => self.feeding(),
        }
    }

    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }

    fn choose_mode(&mut self) -> Result<Option<Mode>> {
        let answer = self.prompter.read_answer(MENU_QUESTION)?;
        let mode = Mode::from_menu_choice(&answer);
        if mode.is_none() {
            tracing::info!(answer = %answer, "no calculation selected");
        }
        Ok(mode)
    }

    fn dough_weight(&mut self) -> Result<Outcome> {
        let weight = self.value(self.presets.weight, InputField::new("Dough weight", 1000.0))?;
        let rates = self.rates()?;
        let recipe = self.formulas.compute_from_dough_weight(weight, &rates);
        self.show(&recipe)
    }

    fn starter_weight(&mut self) -> Result<Outcome> {
        let weight = self.value(self.presets.weight, InputField::new("Starter weight", 150.0))?;
        let rates = self.rates()?;
        let recipe = self.formulas.compute_from_starter_weight(weight, &rates);
        self.show(&recipe)
    }

    fn equivalence(&mut self) -> Result<Outcome> {
        let flour = self.value(self.presets.flour, InputField::new("Flour weight", 500.0))?;
        let water = self.value(self.presets.water, InputField::new("Water weight", 300.0))?;
        let starter_hydration = self.value(
            self.presets.starter_hydration,
            InputField::percentage("Starter hydration (%)", 100.0),
        )?;
        let starter_ratio = self.value(
            self.presets.starter_ratio,
            InputField::percentage("Starter flour to flour ratio (%)", 30.0),
        )?;
        let rates = EquivalenceRates::from_percentages(starter_hydration, starter_ratio)?;
        let recipe = self.formulas.compute_equivalence(flour, water, &rates);
        self.show(&recipe)
    }

    fn feeding(&mut self) -> Result<Outcome> {
        let weight = self.value(self.presets.weight, InputField::new("Starter weight", 150.0))?;
        let rates = self.rates()?;
        let steps = match self.presets.steps {
            Some(steps) => {
                validate_range("steps", steps, 1, MAX_FEEDING_STEPS)?;
                steps
            }
            None if self.presets.covers(Mode::Feeding) => DEFAULT_FEEDING_STEPS,
            None => self.prompter.ask_count(
                &format!("Number of days [{}] : ", DEFAULT_FEEDING_STEPS),
                DEFAULT_FEEDING_STEPS,
                1,
                MAX_FEEDING_STEPS,
            )?,
        };
        let start = self
            .presets
            .start_date
            .unwrap_or_else(|| chrono::Local::now().date_naive());

        let schedule = feeding_schedule(&self.formulas, weight, &rates, steps, start);
        render_schedule(
            self.prompter.output(),
            &schedule,
            self.formulas.salt_rate(),
            self.format,
        )?;

        if schedule.is_complete() {
            Ok(Outcome::Computed)
        } else {
            Ok(Outcome::Infeasible)
        }
    }

    fn rates(&mut self) -> Result<Rates> {
        let dough_hydration = self.value(
            self.presets.dough_hydration,
            InputField::percentage("Dough hydration (%)", 60.0),
        )?;
        let starter_hydration = self.value(
            self.presets.starter_hydration,
            InputField::percentage("Starter hydration (%)", 100.0),
        )?;
        let starter_ratio = self.value(
            self.presets.starter_ratio,
            InputField::percentage("Starter flour to flour ratio (%)", 30.0),
        )?;
        Rates::from_percentages(dough_hydration, starter_hydration, starter_ratio)
    }

    /// A preset is checked once and is final; otherwise the user is asked
    /// until the answer is valid.
    fn value(&mut self, preset: Option<f64>, mut field: InputField) -> Result<f64> {
        match preset {
            Some(value) => field.set_value(value).map_err(|_| LevainError::InvalidConfigValueError {
                field: field.label().to_string(),
                value: value.to_string(),
                reason: "Value out of range".to_string(),
            }),
            None => self.prompter.ask_field(&mut field),
        }
    }

    fn show<T: Recipe + Serialize>(&mut self, recipe: &T) -> Result<Outcome> {
        if !recipe.is_feasible() {
            tracing::warn!(water = recipe.water(), "incompatible hydration rates");
            render_incompatible(self.prompter.output())?;
            return Ok(Outcome::Infeasible);
        }

        render_recipe(
            self.prompter.output(),
            recipe,
            self.formulas.salt_rate(),
            self.format,
        )?;
        Ok(Outcome::Computed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(input: &str, mode: Option<Mode>) -> (Result<Outcome>, String) {
        let mut session = Session::new(
            Formulas::default(),
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
        );
        let outcome = session.run(mode);
        (outcome, String::from_utf8(session.into_output()).unwrap())
    }

    #[test]
    fn test_presets_cover() {
        let presets = Presets {
            weight: Some(920.0),
            dough_hydration: Some(60.0),
            starter_hydration: Some(100.0),
            starter_ratio: Some(30.0),
            ..Presets::default()
        };
        assert!(presets.covers(Mode::DoughWeight));
        assert!(presets.covers(Mode::StarterWeight));
        assert!(!presets.covers(Mode::Equivalence));
        // Number of days falls back to its default.
        assert!(presets.covers(Mode::Feeding));
    }

    #[test]
    fn test_menu_dispatches_to_dough_weight() {
        let (outcome, output) = run("t\n920\n60\n100\n30\n", None);
        assert_eq!(outcome.unwrap(), Outcome::Computed);
        assert!(output.starts_with(MENU_QUESTION));
        assert!(output.contains("Flour weight: 442.3"));
        assert!(output.contains("Starter weight: 265.4"));
    }

    #[test]
    fn test_unknown_menu_choice() {
        let (outcome, output) = run("z\n", None);
        assert_eq!(outcome.unwrap(), Outcome::NoSelection);
        assert_eq!(output, MENU_QUESTION);
    }

    #[test]
    fn test_eof_before_menu_answer() {
        let (outcome, _) = run("", None);
        assert!(matches!(outcome, Err(LevainError::Interrupted)));
    }

    #[test]
    fn test_invalid_preset_is_fatal() {
        let mut session = Session::new(Formulas::default(), Cursor::new(Vec::new()), Vec::new())
            .with_presets(Presets {
                weight: Some(-5.0),
                ..Presets::default()
            });
        let outcome = session.run(Some(Mode::StarterWeight));
        assert!(matches!(
            outcome,
            Err(LevainError::InvalidConfigValueError { .. })
        ));
    }
}
