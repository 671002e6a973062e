//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for Items API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Items API",
        version = "0.1.0",
        description = "Item catalogue with aggregate price statistics",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:3001", description = "Local development server")
    ),
    nest(
        (path = "/api/items", api = domain_items::ApiDoc),
        (path = "/api/stats", api = domain_items::StatsApiDoc)
    ),
    tags(
        (name = "Items", description = "Item management endpoints"),
        (name = "Stats", description = "Aggregate statistics endpoints")
    )
)]
pub struct ApiDoc;
