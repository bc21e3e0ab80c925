//! Item endpoints

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::{Item, ItemInput, ItemQuery},
    AppState,
};

use super::{ApiJson, ApiQuery, DeferredJson, ItemId};

/// Confirmation body for deletes
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// List items, optionally filtered
#[utoipa::path(
    get,
    path = "/items",
    tag = "items",
    params(ItemQuery),
    responses(
        (status = 200, description = "Matching items in insertion order", body = Vec<Item>),
        (status = 400, description = "Malformed query parameter", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_items(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<Vec<(String, String)>>,
) -> AppResult<Json<Vec<Item>>> {
    let query = ItemQuery::from_pairs(params)?;
    let items = state.services.catalog.list_items(&query)?;
    Ok(Json(items))
}

/// Get item by ID
#[utoipa::path(
    get,
    path = "/items/{id}",
    tag = "items",
    params(("id" = i64, Path, description = "Item ID")),
    responses(
        (status = 200, description = "Item details", body = Item),
        (status = 400, description = "Invalid ID", body = crate::error::ErrorResponse),
        (status = 404, description = "Item not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_item(
    State(state): State<AppState>,
    ItemId(id): ItemId,
) -> AppResult<Json<Item>> {
    let item = state.services.catalog.get_item(id)?;
    Ok(Json(item))
}

/// Create a new item
#[utoipa::path(
    post,
    path = "/items",
    tag = "items",
    request_body = ItemInput,
    responses(
        (status = 201, description = "Item created", body = Item),
        (status = 400, description = "Missing or invalid fields", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_item(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<ItemInput>,
) -> AppResult<(StatusCode, Json<Item>)> {
    let item = state.services.catalog.create_item(input)?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Replace an item's fields
#[utoipa::path(
    put,
    path = "/items/{id}",
    tag = "items",
    params(("id" = i64, Path, description = "Item ID")),
    request_body = ItemInput,
    responses(
        (status = 200, description = "Item updated", body = Item),
        (status = 400, description = "Invalid ID or fields", body = crate::error::ErrorResponse),
        (status = 404, description = "Item not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_item(
    State(state): State<AppState>,
    ItemId(id): ItemId,
    body: DeferredJson<ItemInput>,
) -> AppResult<Json<Item>> {
    // Unknown id wins over a bad body
    state.services.catalog.get_item(id)?;
    let input = body.into_inner()?;
    let item = state.services.catalog.update_item(id, input)?;
    Ok(Json(item))
}

/// Delete an item
#[utoipa::path(
    delete,
    path = "/items/{id}",
    tag = "items",
    params(("id" = i64, Path, description = "Item ID")),
    responses(
        (status = 200, description = "Item deleted (library)", body = MessageResponse),
        (status = 204, description = "Item deleted (pet adoption)"),
        (status = 404, description = "Item not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_item(
    State(state): State<AppState>,
    ItemId(id): ItemId,
) -> AppResult<Response> {
    state.services.catalog.delete_item(id)?;

    let domain = state.config.store.domain;
    if domain.delete_returns_body() {
        let message = format!("{} deleted successfully", domain.item_label());
        Ok(Json(MessageResponse { message }).into_response())
    } else {
        Ok(StatusCode::NO_CONTENT.into_response())
    }
}

/// Mark an item as checked out / adopted
#[utoipa::path(
    put,
    path = "/items/{id}/claim",
    tag = "items",
    params(("id" = i64, Path, description = "Item ID")),
    responses(
        (status = 200, description = "Item claimed", body = Item),
        (status = 404, description = "Item not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn claim_item(
    State(state): State<AppState>,
    ItemId(id): ItemId,
) -> AppResult<Json<Item>> {
    let item = state.services.catalog.claim_item(id)?;
    Ok(Json(item))
}
