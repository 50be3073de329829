//! Session and session step log models.

use oasis_core::session::{SessionOutcome, StepStatus};
use oasis_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `sessions` table: one user's run through one flow.
///
/// `flow_id` becomes `None` when the flow is deleted. `ended_at` and
/// `outcome` are both `None` while the session is running.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Session {
    pub id: DbId,
    pub user_id: DbId,
    pub flow_id: Option<DbId>,
    pub started_at: Timestamp,
    pub ended_at: Option<Timestamp>,
    pub outcome: Option<SessionOutcome>,
}

impl Session {
    pub fn is_open(&self) -> bool {
        self.ended_at.is_none()
    }
}

/// A row from the `session_step_logs` table.
///
/// `flow_step_id` becomes `None` when the flow step is deleted.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SessionStepLog {
    pub id: DbId,
    pub session_id: DbId,
    pub flow_step_id: Option<DbId>,
    pub started_at: Timestamp,
    pub completed_at: Option<Timestamp>,
    pub skipped: bool,
}

impl SessionStepLog {
    pub fn status(&self) -> StepStatus {
        StepStatus::derive(self.skipped, self.completed_at)
    }
}
