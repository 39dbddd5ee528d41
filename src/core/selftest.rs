//! Worked examples shipped with the binary (`--test`).
//!
//! They always run with the default salt rate so the expected values do not
//! depend on the local configuration file.

use crate::core::formulas::Formulas;
use crate::domain::model::{EquivalenceRates, Rates};
use crate::utils::error::Result;

#[derive(Debug, Clone, PartialEq)]
pub struct ExampleOutcome {
    pub name: &'static str,
    pub expected: [f64; 4],
    pub actual: [f64; 4],
}

impl ExampleOutcome {
    pub fn passed(&self) -> bool {
        self.expected == self.actual
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelfTestReport {
    pub outcomes: Vec<ExampleOutcome>,
}

impl SelfTestReport {
    pub fn passed(&self) -> bool {
        self.outcomes.iter().all(ExampleOutcome::passed)
    }

    pub fn failures(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.passed()).count()
    }
}

pub fn run_examples() -> Result<SelfTestReport> {
    let formulas = Formulas::default();
    let mut outcomes = Vec::with_capacity(3);

    let dough = formulas.compute_from_dough_weight(920.0, &Rates::new(0.6, 1.0, 0.3)?);
    outcomes.push(ExampleOutcome {
        name: "compute_from_dough_weight(920, 0.6, 1.0, 0.3)",
        expected: [442.3, 212.3, 265.4, 11.5],
        actual: [dough.flour, dough.water, dough.starter, dough.salt],
    });

    let starter = formulas.compute_from_starter_weight(200.0, &Rates::new(0.6, 1.0, 0.25)?);
    outcomes.push(ExampleOutcome {
        name: "compute_from_starter_weight(200, 0.6, 1.0, 0.25)",
        expected: [400.0, 200.0, 800.0, 10.0],
        actual: [starter.flour, starter.water, starter.dough, starter.salt],
    });

    let equivalence =
        formulas.compute_equivalence(500.0, 300.0, &EquivalenceRates::new(0.7, 0.4)?);
    outcomes.push(ExampleOutcome {
        name: "compute_equivalence(500, 300, 0.7, 0.4)",
        expected: [429.3, 199.0, 171.7, 10.0],
        actual: [
            equivalence.flour,
            equivalence.water,
            equivalence.starter,
            equivalence.salt,
        ],
    });

    for outcome in &outcomes {
        if outcome.passed() {
            tracing::debug!(example = outcome.name, "example passed");
        } else {
            tracing::error!(
                example = outcome.name,
                "expected {:?}, got {:?}",
                outcome.expected,
                outcome.actual
            );
        }
    }

    Ok(SelfTestReport { outcomes })
}
