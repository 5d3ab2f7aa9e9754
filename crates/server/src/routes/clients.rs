use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::Json;
use common::ResponseEnvelope;
use models::client;
use service::client_service::ClientInput;

use crate::errors::{bad_body, bad_path};
use crate::state::ServerState;

#[utoipa::path(
    get, path = "/api/clients", tag = "clients",
    responses(
        (status = 200, description = "Clients retrieved", body = crate::openapi::EnvelopeDoc),
        (status = 500, description = "Storage failure", body = crate::openapi::EnvelopeDoc)
    )
)]
pub async fn list(State(state): State<ServerState>) -> ResponseEnvelope<Vec<client::Model>> {
    state.services.clients.list().await
}

#[utoipa::path(
    post, path = "/api/clients", tag = "clients",
    request_body = crate::openapi::ClientInputDoc,
    responses(
        (status = 201, description = "Client created", body = crate::openapi::EnvelopeDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::EnvelopeDoc),
        (status = 500, description = "Create Failed", body = crate::openapi::EnvelopeDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<ClientInput>, JsonRejection>,
) -> ResponseEnvelope<client::Model> {
    match payload {
        Ok(Json(input)) => state.services.clients.create(input).await,
        Err(rejection) => bad_body(rejection),
    }
}

#[utoipa::path(
    get, path = "/api/clients/{id}", tag = "clients",
    params(("id" = i64, Path, description = "Client ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::EnvelopeDoc),
        (status = 404, description = "Not Found", body = crate::openapi::EnvelopeDoc)
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
) -> ResponseEnvelope<client::Model> {
    match id {
        Ok(Path(id)) => state.services.clients.get(id).await,
        Err(rejection) => bad_path(rejection),
    }
}

#[utoipa::path(
    put, path = "/api/clients/{id}", tag = "clients",
    params(("id" = i64, Path, description = "Client ID")),
    request_body = crate::openapi::ClientInputDoc,
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
    payload: Result<Json<ClientInput>, JsonRejection>,
) -> ResponseEnvelope<client::Model> {
    let id = match id {
        Ok(Path(id)) => id,
        Err(rejection) => return bad_path(rejection),
    };
    match payload {
        Ok(Json(input)) => state.services.clients.update(id, input).await,
        Err(rejection) => bad_body(rejection),
    }
}

#[utoipa::path(
    delete, path = "/api/clients/{id}", tag = "clients",
    params(("id" = i64, Path, description = "Client ID")),
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
        Ok(Path(id)) => state.services.clients.delete(id).await,
        Err(rejection) => bad_path(rejection),
    }
}
