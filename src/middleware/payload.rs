use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde_json::Value;

use crate::error::AppError;
use crate::validation::ValidationErrors;

/// An untyped JSON request body.
///
/// Bodies that are not JSON are rejected as validation failures (400) so
/// every malformed payload reaches the client in the same shape.
#[derive(Debug, Clone)]
pub struct JsonPayload(pub Value);

impl<S> FromRequest<S> for JsonPayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<Value>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(rejection_to_error(rejection)),
        }
    }
}

fn rejection_to_error(rejection: JsonRejection) -> AppError {
    AppError::Validation(ValidationErrors::schema(rejection.body_text()))
}
