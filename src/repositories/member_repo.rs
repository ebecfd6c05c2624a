use rusqlite::OptionalExtension;

use crate::db::DbPool;
use crate::error::{AppError, Result};
use crate::models::{FromSqliteRow, Member, MemberPayload};

#[derive(Clone)]
pub struct MemberRepository {
    pool: DbPool,
}

impl MemberRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Insert a member. Returns the assigned id.
    pub async fn create(&self, payload: &MemberPayload) -> Result<i64> {
        let pool = self.pool.clone();
        let payload = payload.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            conn.execute(
                "INSERT INTO Members (name, age, gender) VALUES (?, ?, ?)",
                rusqlite::params![payload.name, payload.age, payload.gender],
            )?;
            Ok(conn.last_insert_rowid())
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Member>> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt = conn.prepare(
                "SELECT member_id, name, age, gender FROM Members WHERE member_id = ?",
            )?;
            let result = stmt.query_row([id], Member::from_row).optional()?;
            Ok(result)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    /// Replace every mutable field. Returns the number of rows matched.
    pub async fn update(&self, id: i64, payload: &MemberPayload) -> Result<usize> {
        let pool = self.pool.clone();
        let payload = payload.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let affected = conn.execute(
                "UPDATE Members SET name = ?, age = ?, gender = ? WHERE member_id = ?",
                rusqlite::params![payload.name, payload.age, payload.gender, id],
            )?;
            Ok(affected)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    /// Returns the number of rows removed.
    pub async fn delete(&self, id: i64) -> Result<usize> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let affected = conn.execute("DELETE FROM Members WHERE member_id = ?", [id])?;
            Ok(affected)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }
}
