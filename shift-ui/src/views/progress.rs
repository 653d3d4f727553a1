use std::fmt;

use serde::Serialize;

use super::view_controller::View;
use crate::models::ids;

/// Display state of one progress step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepState {
    #[default]
    Neutral,
    Active,
    Completed,
}

/// The three-step indicator: calendar, time entry, confirmation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProgressIndicator {
    pub steps: [StepState; 3],
}

impl ProgressIndicator {
    pub fn for_view(view: View) -> Self {
        let steps = match view {
            View::Calendar => [StepState::Active, StepState::Neutral, StepState::Neutral],
            View::TimeEntry => [StepState::Completed, StepState::Active, StepState::Neutral],
        };
        Self { steps }
    }

    /// State of the step with the given element id (`step1`..`step3`).
    pub fn step(
        &self,
        id: &str,
    ) -> Option<StepState> {
        ids::STEPS
            .iter()
            .position(|s| *s == id)
            .map(|i| self.steps[i])
    }
}

impl fmt::Display for ProgressIndicator {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let labels = ["カレンダー", "時間入力", "確認"];
        let parts: Vec<String> = labels
            .iter()
            .zip(self.steps)
            .map(|(label, state)| match state {
                StepState::Neutral => format!(" {label} "),
                StepState::Active => format!("[{label}]"),
                StepState::Completed => format!("✓{label} "),
            })
            .collect();
        f.write_str(&parts.join(" > "))
    }
}
