use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::db::DbPool;
use crate::version::GIT_VERSION;

#[derive(Clone)]
pub struct HealthState {
    pub pool: DbPool,
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    database: &'static str,
    git_version: &'static str,
}

/// 200 when a connection can be checked out and queried, 503 otherwise.
pub async fn health_check(
    State(state): State<HealthState>,
) -> (StatusCode, Json<HealthResponse>) {
    let reachable = tokio::task::spawn_blocking(move || {
        let conn = state.pool.get()?;
        conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))?;
        Ok::<_, anyhow::Error>(())
    })
    .await;

    let (status, overall, database) = match reachable {
        Ok(Ok(())) => (StatusCode::OK, "ok", "ok"),
        Ok(Err(e)) => {
            tracing::warn!("Health check could not reach database: {:?}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "degraded", "unavailable")
        }
        Err(e) => {
            tracing::error!("Health check task failed: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "degraded", "unavailable")
        }
    };

    (
        status,
        Json(HealthResponse {
            status: overall,
            database,
            git_version: GIT_VERSION,
        }),
    )
}
