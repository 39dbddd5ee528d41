//! Iterative starter feeding: the dough made on one day is used as the
//! starter on the next.

use crate::core::formulas::Formulas;
use crate::domain::model::Rates;
use crate::domain::ports::Recipe;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_FEEDING_STEPS: u32 = 5;
pub const MAX_FEEDING_STEPS: u32 = 30;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedingStep {
    pub day: u32,
    pub date: NaiveDate,
    pub starter: f64,
    /// Hydration of the starter used on this day, as a fraction.
    pub starter_hydration: f64,
    pub flour: f64,
    pub water: f64,
    pub dough: f64,
    pub salt: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedingSchedule {
    pub steps: Vec<FeedingStep>,
    /// Day on which the rates became incompatible, if any.
    pub stopped_at: Option<u32>,
}

impl FeedingSchedule {
    pub fn is_complete(&self) -> bool {
        self.stopped_at.is_none()
    }
}

/// Runs `steps` feedings starting from `starter_weight`.
///
/// Day 1 uses the given rates. From day 2 the starter is the previous dough,
/// so its hydration becomes the dough hydration. Every day is checked for
/// feasibility and the schedule stops at the first incompatible one.
pub fn feeding_schedule(
    formulas: &Formulas,
    starter_weight: f64,
    rates: &Rates,
    steps: u32,
    start: NaiveDate,
) -> FeedingSchedule {
    let mut schedule = FeedingSchedule {
        steps: Vec::with_capacity(steps as usize),
        stopped_at: None,
    };
    let mut starter = starter_weight;
    let mut day_rates = *rates;

    for day in 1..=steps {
        let recipe = formulas.compute_from_starter_weight(starter, &day_rates);
        if !recipe.is_feasible() {
            tracing::warn!(day, water = recipe.water, "incompatible hydration rates in feeding schedule");
            schedule.stopped_at = Some(day);
            break;
        }

        let date = start
            .checked_add_days(Days::new(u64::from(day - 1)))
            .unwrap_or(NaiveDate::MAX);

        schedule.steps.push(FeedingStep {
            day,
            date,
            starter,
            starter_hydration: day_rates.starter_hydration,
            flour: recipe.flour,
            water: recipe.water,
            dough: recipe.dough,
            salt: recipe.salt,
        });

        starter = recipe.dough;
        day_rates.starter_hydration = rates.dough_hydration;
    }

    schedule
}
