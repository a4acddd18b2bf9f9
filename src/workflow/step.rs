use std::fmt;

use serde::{Deserialize, Serialize};

/// The three steps of the screening workflow.
///
/// A session flows through: CRITERIA → INTAKE → RESULTS
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Step {
    Criteria,
    Intake,
    Results,
}

impl Step {
    /// One-based position of the step, used by the terminal stepper header.
    pub fn position(&self) -> usize {
        match self {
            Step::Criteria => 1,
            Step::Intake => 2,
            Step::Results => 3,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Criteria => write!(f, "CRITERIA"),
            Step::Intake => write!(f, "INTAKE"),
            Step::Results => write!(f, "RESULTS"),
        }
    }
}
