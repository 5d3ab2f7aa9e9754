use axum::http::StatusCode;
use common::ResponseEnvelope;
use tracing::{error, warn};

use crate::errors::ServiceError;

/// Wrap a successful payload, or turn the error into a failure envelope
/// whose message is `"<prefix>: <error>"`.
pub(crate) fn respond<T>(
    result: Result<T, ServiceError>,
    status: StatusCode,
    message: &str,
    failure_prefix: &str,
) -> ResponseEnvelope<T> {
    match result {
        Ok(payload) => ResponseEnvelope::success(payload, status, message),
        Err(e) => failed(failure_prefix, e),
    }
}

/// Like `respond` for operations without a payload.
pub(crate) fn respond_empty(
    result: Result<(), ServiceError>,
    status: StatusCode,
    message: &str,
    failure_prefix: &str,
) -> ResponseEnvelope<()> {
    match result {
        Ok(()) => ResponseEnvelope::empty(status, message),
        Err(e) => failed(failure_prefix, e),
    }
}

fn failed<T>(prefix: &str, e: ServiceError) -> ResponseEnvelope<T> {
    let status = e.status_code();
    if status.is_server_error() {
        error!(error = %e, code = status.as_u16(), "{prefix}");
    } else {
        warn!(error = %e, code = status.as_u16(), "{prefix}");
    }
    ResponseEnvelope::failure(status, format!("{prefix}: {e}"))
}
