use rusqlite::OptionalExtension;

use crate::db::DbPool;
use crate::error::{AppError, Result};
use crate::models::{FromSqliteRow, WorkoutSession, WorkoutSessionPayload};

const SESSION_COLUMNS: &str = "session_id, member_id, date, duration, calories_burned";

#[derive(Clone)]
pub struct WorkoutSessionRepository {
    pool: DbPool,
}

impl WorkoutSessionRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Insert a session. Returns the assigned id.
    ///
    /// The owning member is not looked up first; a dangling `member_id` is
    /// rejected by the foreign key and surfaces as a database error.
    pub async fn create(&self, payload: &WorkoutSessionPayload) -> Result<i64> {
        let pool = self.pool.clone();
        let payload = payload.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            conn.execute(
                "INSERT INTO WorkoutSessions (member_id, date, duration, calories_burned)
                 VALUES (?, ?, ?, ?)",
                rusqlite::params![
                    payload.member_id,
                    payload.date,
                    payload.duration,
                    payload.calories_burned
                ],
            )?;
            Ok(conn.last_insert_rowid())
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<WorkoutSession>> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt = conn.prepare(&format!(
                "SELECT {} FROM WorkoutSessions WHERE session_id = ?",
                SESSION_COLUMNS
            ))?;
            let result = stmt.query_row([id], WorkoutSession::from_row).optional()?;
            Ok(result)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    pub async fn find_by_member(&self, member_id: i64) -> Result<Vec<WorkoutSession>> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt = conn.prepare(&format!(
                "SELECT {} FROM WorkoutSessions WHERE member_id = ? ORDER BY date, session_id",
                SESSION_COLUMNS
            ))?;
            let sessions = stmt
                .query_map([member_id], WorkoutSession::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(sessions)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    /// Replace every mutable field. Returns the number of rows matched.
    pub async fn update(&self, id: i64, payload: &WorkoutSessionPayload) -> Result<usize> {
        let pool = self.pool.clone();
        let payload = payload.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let affected = conn.execute(
                "UPDATE WorkoutSessions
                 SET member_id = ?, date = ?, duration = ?, calories_burned = ?
                 WHERE session_id = ?",
                rusqlite::params![
                    payload.member_id,
                    payload.date,
                    payload.duration,
                    payload.calories_burned,
                    id
                ],
            )?;
            Ok(affected)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }
}
