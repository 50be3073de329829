//! Repository for the `flow_steps` table.

use oasis_core::types::DbId;
use sqlx::PgPool;

use crate::models::flow::{CreateFlowStep, FlowStep};

const COLUMNS: &str = r#"id, flow_id, activity_id, "order", has_check_in"#;

/// Provides operations for the steps that make up a flow.
pub struct FlowStepRepo;

impl FlowStepRepo {
    /// Insert a step, returning the created row.
    ///
    /// The `order` value is stored as given: gaps and duplicates within a
    /// flow are accepted.
    pub async fn create(pool: &PgPool, input: &CreateFlowStep) -> Result<FlowStep, sqlx::Error> {
        let query = format!(
            r#"INSERT INTO flow_steps (flow_id, activity_id, "order", has_check_in)
               VALUES ($1, $2, $3, $4)
               RETURNING {COLUMNS}"#
        );
        sqlx::query_as::<_, FlowStep>(&query)
            .bind(input.flow_id)
            .bind(input.activity_id)
            .bind(input.order)
            .bind(input.has_check_in)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<FlowStep>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM flow_steps WHERE id = $1");
        sqlx::query_as::<_, FlowStep>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the steps of a flow by ascending `order`. Steps sharing an
    /// `order` value are returned in id order.
    pub async fn list_for_flow(pool: &PgPool, flow_id: DbId) -> Result<Vec<FlowStep>, sqlx::Error> {
        let query = format!(
            r#"SELECT {COLUMNS} FROM flow_steps WHERE flow_id = $1 ORDER BY "order", id"#
        );
        sqlx::query_as::<_, FlowStep>(&query)
            .bind(flow_id)
            .fetch_all(pool)
            .await
    }

    /// List every step, across all flows, that uses the given activity.
    pub async fn list_for_activity(
        pool: &PgPool,
        activity_id: DbId,
    ) -> Result<Vec<FlowStep>, sqlx::Error> {
        let query = format!(
            r#"SELECT {COLUMNS} FROM flow_steps WHERE activity_id = $1 ORDER BY flow_id, "order", id"#
        );
        sqlx::query_as::<_, FlowStep>(&query)
            .bind(activity_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a step. Step logs that referenced it keep their history with
    /// `flow_step_id` set to NULL.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM flow_steps WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
