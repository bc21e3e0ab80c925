//! API handlers for the lending REST endpoints

pub mod health;
pub mod items;
pub mod openapi;
pub mod owners;

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Json, Path, Query, Request},
    http::request::Parts,
    routing::{get, put},
    Router,
};
use serde::de::DeserializeOwned;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    error::{AppError, AppResult},
    AppState,
};

/// JSON body extractor that reports malformed bodies as validation errors
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Validation(rejection.body_text()))?;
        Ok(ApiJson(value))
    }
}

/// JSON body whose decoding error is held back until the handler asks for it.
///
/// Lets a handler report a missing target before complaining about the body.
pub struct DeferredJson<T>(AppResult<T>);

impl<T> DeferredJson<T> {
    pub fn into_inner(self) -> AppResult<T> {
        self.0
    }
}

#[async_trait]
impl<T, S> FromRequest<S> for DeferredJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        Ok(DeferredJson(
            ApiJson::<T>::from_request(req, state)
                .await
                .map(|ApiJson(value)| value),
        ))
    }
}

/// Query string extractor that reports malformed parameters as invalid arguments
pub struct ApiQuery<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::InvalidArgument(rejection.body_text()))?;
        Ok(ApiQuery(value))
    }
}

/// Parse a numeric id path segment.
///
/// Runs before any lookup so a malformed id never turns into a not-found.
pub fn parse_id(raw: &str, entity: &str) -> AppResult<i64> {
    raw.parse::<i64>().map_err(|_| {
        AppError::InvalidArgument(format!(
            "Please provide a valid {} ID integer value, got '{}'",
            entity, raw
        ))
    })
}

/// Raw path parameter values, in route order
async fn raw_path_segments<S: Send + Sync>(parts: &mut Parts, state: &S) -> AppResult<Vec<String>> {
    let Path(params) = Path::<Vec<(String, String)>>::from_request_parts(parts, state)
        .await
        .map_err(|rejection| AppError::InvalidArgument(rejection.body_text()))?;
    Ok(params.into_iter().map(|(_, value)| value).collect())
}

/// `:id` path parameter of an item route
pub struct ItemId(pub i64);

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for ItemId {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let segments = raw_path_segments(parts, state).await?;
        match segments.as_slice() {
            [id] => Ok(ItemId(parse_id(id, "item")?)),
            _ => Err(AppError::InvalidArgument("Expected one item ID".to_string())),
        }
    }
}

/// `:id` path parameter of an owner route
pub struct OwnerId(pub i64);

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for OwnerId {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let segments = raw_path_segments(parts, state).await?;
        match segments.as_slice() {
            [id] => Ok(OwnerId(parse_id(id, "owner")?)),
            _ => Err(AppError::InvalidArgument("Expected one owner ID".to_string())),
        }
    }
}

/// `:id` and `:item_id` path parameters of an association route
pub struct OwnerItemIds {
    pub owner_id: i64,
    pub item_id: i64,
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for OwnerItemIds {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let segments = raw_path_segments(parts, state).await?;
        match segments.as_slice() {
            [owner_id, item_id] => Ok(OwnerItemIds {
                owner_id: parse_id(owner_id, "owner")?,
                item_id: parse_id(item_id, "item")?,
            }),
            _ => Err(AppError::InvalidArgument(
                "Expected an owner ID and an item ID".to_string(),
            )),
        }
    }
}

/// Item and owner routes under the given collection names
fn resource_routes(items: &str, owners: &str, claim: &str) -> Router<AppState> {
    Router::new()
        .route(
            &format!("/{items}"),
            get(self::items::list_items).post(self::items::create_item),
        )
        .route(
            &format!("/{items}/:id"),
            get(self::items::get_item)
                .put(self::items::update_item)
                .delete(self::items::delete_item),
        )
        .route(&format!("/{items}/:id/{claim}"), put(self::items::claim_item))
        .route(
            &format!("/{owners}"),
            get(self::owners::list_owners).post(self::owners::create_owner),
        )
        .route(&format!("/{owners}/:id"), get(self::owners::get_owner))
        .route(
            &format!("/{owners}/:id/{items}"),
            get(self::owners::list_owner_items),
        )
        .route(
            &format!("/{owners}/:id/{items}/:item_id"),
            put(self::owners::associate),
        )
        .route(
            &format!("/{owners}/:id/{claim}/:item_id"),
            put(self::owners::associate),
        )
}

/// Create the application router with all routes.
///
/// Generic `/items` and `/owners` routes are always mounted; the configured
/// domain adds its own names (`/books` + `/users`, or `/pets` + `/adopters`).
pub fn create_router(state: AppState) -> Router {
    let domain = state.config.store.domain;

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .merge(resource_routes("items", "owners", "claim"))
        .merge(resource_routes(
            domain.item_collection(),
            domain.owner_collection(),
            domain.claim_action(),
        ))
        .with_state(state);

    // OpenAPI documentation
    let openapi = openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
}
