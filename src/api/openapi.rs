//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{health, items, owners};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Lending API",
        version = "0.1.0",
        description = "In-memory item lending / adoption REST API. The routes below are \
                       also mounted under the domain names (/books and /users, or /pets and /adopters)."
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Items
        items::list_items,
        items::get_item,
        items::create_item,
        items::update_item,
        items::delete_item,
        items::claim_item,
        // Owners
        owners::list_owners,
        owners::get_owner,
        owners::create_owner,
        owners::list_owner_items,
        owners::associate,
    ),
    components(
        schemas(
            // Items
            crate::models::item::Item,
            crate::models::item::ItemInput,
            items::MessageResponse,
            // Owners
            crate::models::owner::Owner,
            crate::models::owner::OwnerInput,
            crate::models::owner::OwnerWithItems,
            // Health
            health::HealthResponse,
            health::ReadinessResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "items", description = "Item management"),
        (name = "owners", description = "Owners and item associations")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
