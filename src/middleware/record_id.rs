use axum::{
    extract::{rejection::PathRejection, FromRequestParts, Path},
    http::request::Parts,
};

use crate::error::AppError;

/// The integer id captured from the route.
///
/// An id that does not parse as an integer matches no record, so it is
/// answered with the JSON 404 body rather than axum's plain-text rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordId(pub i64);

impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<i64>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(Self(id)),
            Err(rejection) => Err(rejection_to_error(rejection)),
        }
    }
}

fn rejection_to_error(rejection: PathRejection) -> AppError {
    tracing::debug!("Unmatched record id: {}", rejection.body_text());
    AppError::NotFound("Resource not found".to_string())
}
