//! Repository for the `session_step_logs` table.

use oasis_core::types::DbId;
use sqlx::PgPool;

use crate::models::session::SessionStepLog;

const COLUMNS: &str = "id, session_id, flow_step_id, started_at, completed_at, skipped";

/// Records progress through the steps of a session.
pub struct SessionStepLogRepo;

impl SessionStepLogRepo {
    /// Record that a step has started within a session.
    pub async fn start(
        pool: &PgPool,
        session_id: DbId,
        flow_step_id: Option<DbId>,
    ) -> Result<SessionStepLog, sqlx::Error> {
        let query = format!(
            "INSERT INTO session_step_logs (session_id, flow_step_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SessionStepLog>(&query)
            .bind(session_id)
            .bind(flow_step_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<SessionStepLog>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM session_step_logs WHERE id = $1");
        sqlx::query_as::<_, SessionStepLog>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a session's step logs in the order they were started.
    ///
    /// `started_at` defaults to `clock_timestamp()`, so logs written in the
    /// same transaction keep their insertion order.
    pub async fn list_for_session(
        pool: &PgPool,
        session_id: DbId,
    ) -> Result<Vec<SessionStepLog>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM session_step_logs WHERE session_id = $1 ORDER BY started_at, id"
        );
        sqlx::query_as::<_, SessionStepLog>(&query)
            .bind(session_id)
            .fetch_all(pool)
            .await
    }

    /// List every log recorded against a flow step, across sessions.
    pub async fn list_for_flow_step(
        pool: &PgPool,
        flow_step_id: DbId,
    ) -> Result<Vec<SessionStepLog>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM session_step_logs WHERE flow_step_id = $1 ORDER BY started_at, id"
        );
        sqlx::query_as::<_, SessionStepLog>(&query)
            .bind(flow_step_id)
            .fetch_all(pool)
            .await
    }

    /// Mark a step as completed now.
    ///
    /// Returns `None` if the log does not exist or is already finished.
    pub async fn complete(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<SessionStepLog>, sqlx::Error> {
        let query = format!(
            "UPDATE session_step_logs SET completed_at = NOW()
             WHERE id = $1 AND completed_at IS NULL AND skipped = false
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SessionStepLog>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Mark a step as skipped; the skip time is recorded in `completed_at`.
    ///
    /// Returns `None` if the log does not exist or is already finished.
    pub async fn skip(pool: &PgPool, id: DbId) -> Result<Option<SessionStepLog>, sqlx::Error> {
        let query = format!(
            "UPDATE session_step_logs SET skipped = true, completed_at = NOW()
             WHERE id = $1 AND completed_at IS NULL AND skipped = false
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SessionStepLog>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
