use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::message;
use crate::error::{AppError, Result};
use crate::middleware::{JsonPayload, RecordId};
use crate::models::WorkoutSessionPayload;
use crate::repositories::WorkoutSessionRepository;

#[derive(Clone)]
pub struct WorkoutSessionsState {
    pub session_repo: WorkoutSessionRepository,
}

pub async fn create(
    State(state): State<WorkoutSessionsState>,
    JsonPayload(body): JsonPayload,
) -> Result<Response> {
    let payload = WorkoutSessionPayload::from_json(&body)?;

    let id = state.session_repo.create(&payload).await?;
    tracing::debug!(
        "Scheduled workout session {} for member {}",
        id,
        payload.member_id
    );

    Ok(message(StatusCode::CREATED, "Workout session scheduled successfully").into_response())
}

pub async fn show(
    State(state): State<WorkoutSessionsState>,
    RecordId(id): RecordId,
) -> Result<Response> {
    let session = state
        .session_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Workout session not found".to_string()))?;

    Ok(Json(session).into_response())
}

/// Reports success whether or not a session with `id` exists.
pub async fn update(
    State(state): State<WorkoutSessionsState>,
    RecordId(id): RecordId,
    JsonPayload(body): JsonPayload,
) -> Result<Response> {
    let payload = WorkoutSessionPayload::from_json(&body)?;

    let affected = state.session_repo.update(id, &payload).await?;
    if affected == 0 {
        tracing::warn!("Update matched no workout session with id {}", id);
    }

    Ok(message(StatusCode::OK, "Workout session details updated successfully").into_response())
}

/// Sessions owned by `member_id`. An unknown member yields an empty list.
pub async fn list_for_member(
    State(state): State<WorkoutSessionsState>,
    RecordId(member_id): RecordId,
) -> Result<Response> {
    let sessions = state.session_repo.find_by_member(member_id).await?;

    Ok(Json(sessions).into_response())
}
