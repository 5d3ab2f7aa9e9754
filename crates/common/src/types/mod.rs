use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Uniform wrapper returned by every service operation.
///
/// `code` mirrors the HTTP status of the outcome; `response` is `None` for
/// failures and for operations without a payload (delete).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ResponseEnvelope<T> {
    pub response: Option<T>,
    pub code: u16,
    pub message: String,
}

impl<T> ResponseEnvelope<T> {
    pub fn success(payload: T, status: StatusCode, message: impl Into<String>) -> Self {
        Self { response: Some(payload), code: status.as_u16(), message: message.into() }
    }

    pub fn empty(status: StatusCode, message: impl Into<String>) -> Self {
        Self { response: None, code: status.as_u16(), message: message.into() }
    }

    pub fn failure(status: StatusCode, message: impl Into<String>) -> Self {
        Self::empty(status, message)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.code)
    }

    /// Status as an HTTP code; unknown values degrade to 500.
    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl<T: Serialize> IntoResponse for ResponseEnvelope<T> {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_carries_payload_and_code() {
        let env = ResponseEnvelope::success(7u32, StatusCode::CREATED, "created");
        assert_eq!(env.response, Some(7));
        assert_eq!(env.code, 201);
        assert!(env.is_success());
    }

    #[test]
    fn failure_has_no_payload() {
        let env: ResponseEnvelope<u32> = ResponseEnvelope::failure(StatusCode::NOT_FOUND, "missing");
        assert!(env.response.is_none());
        assert_eq!(env.status(), StatusCode::NOT_FOUND);
        assert!(!env.is_success());
    }

    #[test]
    fn serializes_with_null_payload() {
        let env: ResponseEnvelope<()> = ResponseEnvelope::empty(StatusCode::OK, "deleted");
        let json = serde_json::to_value(&env).unwrap();
        assert_eq!(json, serde_json::json!({"response": null, "code": 200, "message": "deleted"}));
    }

    #[tokio::test]
    async fn into_response_uses_envelope_code() {
        let env: ResponseEnvelope<()> = ResponseEnvelope::failure(StatusCode::CONFLICT, "dup");
        let res = env.into_response();
        assert_eq!(res.status(), StatusCode::CONFLICT);
    }
}
