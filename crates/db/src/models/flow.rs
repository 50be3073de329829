//! Flow and flow step models.

use oasis_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A flow row from the `flows` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Flow {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new flow. The name column holds up to 100 characters.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFlow {
    pub name: String,
    pub description: String,
}

/// A row from the `flow_steps` table: one activity at one position in a flow.
///
/// `order` sorts steps within a flow. Values may repeat or skip.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FlowStep {
    pub id: DbId,
    pub flow_id: DbId,
    pub activity_id: DbId,
    pub order: i32,
    pub has_check_in: bool,
}

/// DTO for adding a step to a flow.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFlowStep {
    pub flow_id: DbId,
    pub activity_id: DbId,
    pub order: i32,
    #[serde(default)]
    pub has_check_in: bool,
}
