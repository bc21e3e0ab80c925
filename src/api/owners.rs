//! Owner and association endpoints

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::{Item, Owner, OwnerInput, OwnerWithItems},
    AppState,
};

use super::{ApiJson, OwnerId, OwnerItemIds};

/// List owners with their held items
#[utoipa::path(
    get,
    path = "/owners",
    tag = "owners",
    responses(
        (status = 200, description = "All owners with resolved items", body = Vec<OwnerWithItems>)
    )
)]
pub async fn list_owners(State(state): State<AppState>) -> AppResult<Json<Vec<OwnerWithItems>>> {
    let owners = state.services.owners.list_owners()?;
    Ok(Json(owners))
}

/// Get owner by ID
#[utoipa::path(
    get,
    path = "/owners/{id}",
    tag = "owners",
    params(("id" = i64, Path, description = "Owner ID")),
    responses(
        (status = 200, description = "Owner details", body = Owner),
        (status = 404, description = "Owner not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_owner(
    State(state): State<AppState>,
    OwnerId(id): OwnerId,
) -> AppResult<Json<Owner>> {
    let owner = state.services.owners.get_owner(id)?;
    Ok(Json(owner))
}

/// Register a new owner
#[utoipa::path(
    post,
    path = "/owners",
    tag = "owners",
    request_body = OwnerInput,
    responses(
        (status = 201, description = "Owner created", body = Owner),
        (status = 400, description = "Missing or unknown fields", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_owner(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<OwnerInput>,
) -> AppResult<(StatusCode, Json<Owner>)> {
    let owner = state.services.owners.create_owner(input)?;
    Ok((StatusCode::CREATED, Json(owner)))
}

/// Items held by an owner
#[utoipa::path(
    get,
    path = "/owners/{id}/items",
    tag = "owners",
    params(("id" = i64, Path, description = "Owner ID")),
    responses(
        (status = 200, description = "Held items in association order", body = Vec<Item>),
        (status = 404, description = "Owner not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_owner_items(
    State(state): State<AppState>,
    OwnerId(id): OwnerId,
) -> AppResult<Json<Vec<Item>>> {
    let items = state.services.owners.list_owner_items(id)?;
    Ok(Json(items))
}

/// Associate an item with an owner.
///
/// Also mounted under the claim verb, e.g. `/adopters/{id}/adopt/{item_id}`.
#[utoipa::path(
    put,
    path = "/owners/{id}/items/{item_id}",
    tag = "owners",
    params(
        ("id" = i64, Path, description = "Owner ID"),
        ("item_id" = i64, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Updated owner", body = Owner),
        (status = 400, description = "Invalid ID", body = crate::error::ErrorResponse),
        (status = 404, description = "Owner or item not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn associate(
    State(state): State<AppState>,
    OwnerItemIds { owner_id, item_id }: OwnerItemIds,
) -> AppResult<Json<Owner>> {
    let owner = state.services.owners.associate(owner_id, item_id)?;
    Ok(Json(owner))
}
