//! Session outcome and step progress states.

use serde::{Deserialize, Serialize};
use strum::{IntoStaticStr, VariantArray};

use crate::types::Timestamp;

/// How a session ended. A session that is still running has no outcome.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    IntoStaticStr,
    VariantArray,
    strum::Display,
    strum::EnumString,
    sqlx::Type,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[sqlx(type_name = "text", rename_all = "snake_case")]
pub enum SessionOutcome {
    Completed,
    Abandoned,
    ExitedEarly,
}

impl SessionOutcome {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// Progress of a single step within a session, derived from a step log's
/// `skipped` flag and `completed_at` timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, IntoStaticStr, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum StepStatus {
    InProgress,
    Completed,
    Skipped,
}

impl StepStatus {
    /// Skipping takes precedence over completion.
    pub fn derive(skipped: bool, completed_at: Option<Timestamp>) -> Self {
        if skipped {
            StepStatus::Skipped
        } else if completed_at.is_some() {
            StepStatus::Completed
        } else {
            StepStatus::InProgress
        }
    }
}
