use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::message;
use crate::error::{AppError, Result};
use crate::middleware::{JsonPayload, RecordId};
use crate::models::MemberPayload;
use crate::repositories::MemberRepository;

#[derive(Clone)]
pub struct MembersState {
    pub member_repo: MemberRepository,
}

pub async fn create(
    State(state): State<MembersState>,
    JsonPayload(body): JsonPayload,
) -> Result<Response> {
    let payload = MemberPayload::from_json(&body)?;

    let id = state.member_repo.create(&payload).await?;
    tracing::debug!("Created member {}", id);

    Ok(message(StatusCode::CREATED, "Member added successfully").into_response())
}

pub async fn show(
    State(state): State<MembersState>,
    RecordId(id): RecordId,
) -> Result<Response> {
    let member = state
        .member_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Member not found".to_string()))?;

    Ok(Json(member).into_response())
}

/// Reports success whether or not a member with `id` exists.
pub async fn update(
    State(state): State<MembersState>,
    RecordId(id): RecordId,
    JsonPayload(body): JsonPayload,
) -> Result<Response> {
    let payload = MemberPayload::from_json(&body)?;

    let affected = state.member_repo.update(id, &payload).await?;
    if affected == 0 {
        tracing::warn!("Update matched no member with id {}", id);
    }

    Ok(message(StatusCode::OK, "Member details updated successfully").into_response())
}

/// Reports success whether or not a member with `id` exists.
pub async fn delete(
    State(state): State<MembersState>,
    RecordId(id): RecordId,
) -> Result<Response> {
    let affected = state.member_repo.delete(id).await?;
    if affected == 0 {
        tracing::warn!("Delete matched no member with id {}", id);
    }

    Ok(message(StatusCode::OK, "Member deleted successfully").into_response())
}
