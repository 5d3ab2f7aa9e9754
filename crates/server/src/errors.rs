use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use common::ResponseEnvelope;
use thiserror::Error;
use tracing::warn;

/// Failure envelope for a body that could not be parsed.
///
/// Syntax and data errors (unknown enum value, missing field, wrong type)
/// are client input errors and answer 400; a missing JSON content type or
/// an unreadable body keeps axum's status.
pub fn bad_body<T>(rejection: JsonRejection) -> ResponseEnvelope<T> {
    let status = match &rejection {
        JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => StatusCode::BAD_REQUEST,
        other => other.status(),
    };
    warn!(status = status.as_u16(), "rejected request body");
    ResponseEnvelope::failure(status, format!("Invalid request body: {}", rejection.body_text()))
}

/// Failure envelope for an id segment that is not an integer.
pub fn bad_path<T>(rejection: PathRejection) -> ResponseEnvelope<T> {
    ResponseEnvelope::failure(StatusCode::BAD_REQUEST, format!("Invalid path: {}", rejection.body_text()))
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("database unavailable: {0}")]
    Database(String),
    #[error("migration failed: {0}")]
    Migration(String),
}
