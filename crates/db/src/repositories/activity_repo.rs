//! Repository for the `activities` table.

use oasis_core::types::DbId;
use sqlx::PgPool;

use crate::models::activity::{Activity, CreateActivity};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, category, duration_minutes, instructions, created_at";

/// Provides CRUD operations for activities.
pub struct ActivityRepo;

impl ActivityRepo {
    /// Insert a new activity, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateActivity) -> Result<Activity, sqlx::Error> {
        let query = format!(
            "INSERT INTO activities (name, category, duration_minutes, instructions)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Activity>(&query)
            .bind(&input.name)
            .bind(input.category.as_str())
            .bind(input.duration_minutes.minutes())
            .bind(&input.instructions)
            .fetch_one(pool)
            .await
    }

    /// Find an activity by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Activity>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM activities WHERE id = $1");
        sqlx::query_as::<_, Activity>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every activity in database order. No pagination.
    pub async fn list(pool: &PgPool) -> Result<Vec<Activity>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM activities");
        sqlx::query_as::<_, Activity>(&query).fetch_all(pool).await
    }

    /// Delete an activity by ID. Its flow steps are removed by cascade.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM activities WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
