use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::Json;
use common::ResponseEnvelope;
use models::priority;
use service::priority_service::PriorityInput;

use crate::errors::{bad_body, bad_path};
use crate::state::ServerState;

#[utoipa::path(
    get, path = "/api/priorities", tag = "priorities",
    responses(
        (status = 200, description = "Priorities retrieved", body = crate::openapi::EnvelopeDoc),
        (status = 500, description = "Storage failure", body = crate::openapi::EnvelopeDoc)
    )
)]
pub async fn list(State(state): State<ServerState>) -> ResponseEnvelope<Vec<priority::Model>> {
    state.services.priorities.list().await
}

#[utoipa::path(
    post, path = "/api/priorities", tag = "priorities",
    request_body = crate::openapi::PriorityInputDoc,
    responses(
        (status = 201, description = "Priority created", body = crate::openapi::EnvelopeDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::EnvelopeDoc),
        (status = 500, description = "Create Failed", body = crate::openapi::EnvelopeDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<PriorityInput>, JsonRejection>,
) -> ResponseEnvelope<priority::Model> {
    match payload {
        Ok(Json(input)) => state.services.priorities.create(input).await,
        Err(rejection) => bad_body(rejection),
    }
}

#[utoipa::path(
    get, path = "/api/priorities/{id}", tag = "priorities",
    params(("id" = i64, Path, description = "Priority ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::EnvelopeDoc),
        (status = 404, description = "Not Found", body = crate::openapi::EnvelopeDoc)
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
) -> ResponseEnvelope<priority::Model> {
    match id {
        Ok(Path(id)) => state.services.priorities.get(id).await,
        Err(rejection) => bad_path(rejection),
    }
}

#[utoipa::path(
    put, path = "/api/priorities/{id}", tag = "priorities",
    params(("id" = i64, Path, description = "Priority ID")),
    request_body = crate::openapi::PriorityInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::EnvelopeDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::EnvelopeDoc),
        (status = 404, description = "Not Found", body = crate::openapi::EnvelopeDoc),
        (status = 500, description = "Update Failed", body = crate::openapi::EnvelopeDoc)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<PriorityInput>, JsonRejection>,
) -> ResponseEnvelope<priority::Model> {
    let id = match id {
        Ok(Path(id)) => id,
        Err(rejection) => return bad_path(rejection),
    };
    match payload {
        Ok(Json(input)) => state.services.priorities.update(id, input).await,
        Err(rejection) => bad_body(rejection),
    }
}

#[utoipa::path(
    delete, path = "/api/priorities/{id}", tag = "priorities",
    params(("id" = i64, Path, description = "Priority ID")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::EnvelopeDoc),
        (status = 404, description = "Not Found", body = crate::openapi::EnvelopeDoc),
        (status = 500, description = "Delete Failed", body = crate::openapi::EnvelopeDoc)
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
) -> ResponseEnvelope<()> {
    match id {
        Ok(Path(id)) => state.services.priorities.delete(id).await,
        Err(rejection) => bad_path(rejection),
    }
}
