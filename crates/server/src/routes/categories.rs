use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::Json;
use common::ResponseEnvelope;
use models::category;
use service::category_service::CategoryInput;

use crate::errors::{bad_body, bad_path};
use crate::state::ServerState;

#[utoipa::path(
    get, path = "/api/categories", tag = "categories",
    responses(
        (status = 200, description = "Categories retrieved", body = crate::openapi::EnvelopeDoc),
        (status = 500, description = "Storage failure", body = crate::openapi::EnvelopeDoc)
    )
)]
pub async fn list(State(state): State<ServerState>) -> ResponseEnvelope<Vec<category::Model>> {
    state.services.categories.list().await
}

#[utoipa::path(
    post, path = "/api/categories", tag = "categories",
    request_body = crate::openapi::CategoryInputDoc,
    responses(
        (status = 201, description = "Category created", body = crate::openapi::EnvelopeDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::EnvelopeDoc),
        (status = 500, description = "Create Failed", body = crate::openapi::EnvelopeDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<CategoryInput>, JsonRejection>,
) -> ResponseEnvelope<category::Model> {
    match payload {
        Ok(Json(input)) => state.services.categories.create(input).await,
        Err(rejection) => bad_body(rejection),
    }
}

#[utoipa::path(
    get, path = "/api/categories/{id}", tag = "categories",
    params(("id" = i64, Path, description = "Category ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::EnvelopeDoc),
        (status = 404, description = "Not Found", body = crate::openapi::EnvelopeDoc)
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
) -> ResponseEnvelope<category::Model> {
    match id {
        Ok(Path(id)) => state.services.categories.get(id).await,
        Err(rejection) => bad_path(rejection),
    }
}

#[utoipa::path(
    put, path = "/api/categories/{id}", tag = "categories",
    params(("id" = i64, Path, description = "Category ID")),
    request_body = crate::openapi::CategoryInputDoc,
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
    payload: Result<Json<CategoryInput>, JsonRejection>,
) -> ResponseEnvelope<category::Model> {
    let id = match id {
        Ok(Path(id)) => id,
        Err(rejection) => return bad_path(rejection),
    };
    match payload {
        Ok(Json(input)) => state.services.categories.update(id, input).await,
        Err(rejection) => bad_body(rejection),
    }
}

#[utoipa::path(
    delete, path = "/api/categories/{id}", tag = "categories",
    params(("id" = i64, Path, description = "Category ID")),
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
        Ok(Path(id)) => state.services.categories.delete(id).await,
        Err(rejection) => bad_path(rejection),
    }
}
