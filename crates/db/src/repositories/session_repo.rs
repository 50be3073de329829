//! Repository for the `sessions` table.

use oasis_core::session::SessionOutcome;
use oasis_core::types::DbId;
use sqlx::PgPool;

use crate::models::session::Session;

const COLUMNS: &str = "id, user_id, flow_id, started_at, ended_at, outcome";

/// Provides lifecycle operations for sessions.
pub struct SessionRepo;

impl SessionRepo {
    /// Open a new session for `user_id`. The session starts now with no
    /// outcome.
    pub async fn start(
        pool: &PgPool,
        user_id: DbId,
        flow_id: Option<DbId>,
    ) -> Result<Session, sqlx::Error> {
        let query = format!(
            "INSERT INTO sessions (user_id, flow_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        let session = sqlx::query_as::<_, Session>(&query)
            .bind(user_id)
            .bind(flow_id)
            .fetch_one(pool)
            .await?;

        tracing::debug!(session_id = %session.id, %user_id, "Session started");
        Ok(session)
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Session>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sessions WHERE id = $1");
        sqlx::query_as::<_, Session>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a user's sessions, most recent first.
    pub async fn list_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Session>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sessions WHERE user_id = $1 ORDER BY started_at DESC, id"
        );
        sqlx::query_as::<_, Session>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// List the sessions that ran through a flow, most recent first.
    pub async fn list_for_flow(pool: &PgPool, flow_id: DbId) -> Result<Vec<Session>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sessions WHERE flow_id = $1 ORDER BY started_at DESC, id"
        );
        sqlx::query_as::<_, Session>(&query)
            .bind(flow_id)
            .fetch_all(pool)
            .await
    }

    /// Close a running session with the given outcome.
    ///
    /// Returns `None` if the session does not exist or has already ended;
    /// an ended session is never overwritten.
    pub async fn end(
        pool: &PgPool,
        id: DbId,
        outcome: SessionOutcome,
    ) -> Result<Option<Session>, sqlx::Error> {
        let query = format!(
            "UPDATE sessions SET ended_at = NOW(), outcome = $2
             WHERE id = $1 AND ended_at IS NULL
             RETURNING {COLUMNS}"
        );
        let session = sqlx::query_as::<_, Session>(&query)
            .bind(id)
            .bind(outcome.as_str())
            .fetch_optional(pool)
            .await?;

        if session.is_some() {
            tracing::debug!(session_id = %id, %outcome, "Session ended");
        }
        Ok(session)
    }

    /// Delete a session together with its step logs.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sessions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
