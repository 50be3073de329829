//! Repository for the `flows` table.

use oasis_core::types::DbId;
use sqlx::PgPool;

use crate::models::flow::{CreateFlow, Flow};

const COLUMNS: &str = "id, name, description, created_at";

/// Provides CRUD operations for flows.
pub struct FlowRepo;

impl FlowRepo {
    /// Insert a new flow, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateFlow) -> Result<Flow, sqlx::Error> {
        let query = format!(
            "INSERT INTO flows (name, description)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Flow>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Flow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM flows WHERE id = $1");
        sqlx::query_as::<_, Flow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all flows, oldest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Flow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM flows ORDER BY created_at, id");
        sqlx::query_as::<_, Flow>(&query).fetch_all(pool).await
    }

    /// Delete a flow. Its steps are removed by cascade; sessions that used
    /// it keep their history with `flow_id` set to NULL.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM flows WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
