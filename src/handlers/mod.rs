pub mod health;
pub mod members;
pub mod workout_sessions;

use axum::{http::StatusCode, Json};
use serde::Serialize;

/// Confirmation body returned by write endpoints.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

pub(crate) fn message(
    status: StatusCode,
    message: &'static str,
) -> (StatusCode, Json<MessageResponse>) {
    (status, Json(MessageResponse { message }))
}
