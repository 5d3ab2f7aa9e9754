use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::Json;
use common::ResponseEnvelope;
use models::order;
use service::order_service::OrderInput;

use crate::errors::{bad_body, bad_path};
use crate::state::ServerState;

#[utoipa::path(
    get, path = "/api/orders", tag = "orders",
    responses(
        (status = 200, description = "Orders retrieved", body = crate::openapi::EnvelopeDoc),
        (status = 500, description = "Storage failure", body = crate::openapi::EnvelopeDoc)
    )
)]
pub async fn list(State(state): State<ServerState>) -> ResponseEnvelope<Vec<order::Model>> {
    state.services.orders.list().await
}

#[utoipa::path(
    post, path = "/api/orders", tag = "orders",
    request_body = crate::openapi::OrderInputDoc,
    responses(
        (status = 201, description = "Order created", body = crate::openapi::EnvelopeDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::EnvelopeDoc),
        (status = 500, description = "Create Failed", body = crate::openapi::EnvelopeDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<OrderInput>, JsonRejection>,
) -> ResponseEnvelope<order::Model> {
    match payload {
        Ok(Json(input)) => state.services.orders.create(input).await,
        Err(rejection) => bad_body(rejection),
    }
}

#[utoipa::path(
    get, path = "/api/orders/{id}", tag = "orders",
    params(("id" = i64, Path, description = "Order ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::EnvelopeDoc),
        (status = 404, description = "Not Found", body = crate::openapi::EnvelopeDoc)
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
) -> ResponseEnvelope<order::Model> {
    match id {
        Ok(Path(id)) => state.services.orders.get(id).await,
        Err(rejection) => bad_path(rejection),
    }
}

#[utoipa::path(
    put, path = "/api/orders/{id}", tag = "orders",
    params(("id" = i64, Path, description = "Order ID")),
    request_body = crate::openapi::OrderInputDoc,
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
    payload: Result<Json<OrderInput>, JsonRejection>,
) -> ResponseEnvelope<order::Model> {
    let id = match id {
        Ok(Path(id)) => id,
        Err(rejection) => return bad_path(rejection),
    };
    match payload {
        Ok(Json(input)) => state.services.orders.update(id, input).await,
        Err(rejection) => bad_body(rejection),
    }
}

#[utoipa::path(
    delete, path = "/api/orders/{id}", tag = "orders",
    params(("id" = i64, Path, description = "Order ID")),
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
        Ok(Path(id)) => state.services.orders.delete(id).await,
        Err(rejection) => bad_path(rejection),
    }
}
