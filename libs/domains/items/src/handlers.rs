use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    IdPath, ValidatedJson,
    errors::responses::{
        BadRequestArgumentResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ItemResult;
use crate::models::{Item, ItemListResponse, ItemPayload, ItemQuery, ItemResponse};
use crate::report::{
    CategoryStats, StatsReport, StatsReportResponse, SummaryReport, SummaryResponse,
};
use crate::repository::ItemRepository;
use crate::service::ItemService;
use crate::stats::MinMax;

/// OpenAPI documentation for Items API
#[derive(OpenApi)]
#[openapi(
    paths(list_items, create_item, get_item, update_item, delete_item),
    components(
        schemas(Item, ItemPayload, ItemQuery, ItemListResponse, ItemResponse),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestArgumentResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Items", description = "Item management endpoints")
    )
)]
pub struct ApiDoc;

/// OpenAPI documentation for Stats API
#[derive(OpenApi)]
#[openapi(
    paths(stats_report, stats_summary),
    components(
        schemas(
            StatsReport,
            StatsReportResponse,
            SummaryReport,
            SummaryResponse,
            CategoryStats,
            MinMax
        ),
        responses(InternalServerErrorResponse)
    ),
    tags(
        (name = "Stats", description = "Aggregate statistics over the item collection")
    )
)]
pub struct StatsApiDoc;

/// Create the items router with all HTTP endpoints
pub fn router<R: ItemRepository + 'static>(service: ItemService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_items).post(create_item))
        .route("/{id}", get(get_item).put(update_item).delete(delete_item))
        .with_state(shared_service)
}

/// Create the stats router
pub fn stats_router<R: ItemRepository + 'static>(service: ItemService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(stats_report))
        .route("/summary", get(stats_summary))
        .with_state(shared_service)
}

/// List items, optionally filtered and limited
#[utoipa::path(
    get,
    path = "",
    tag = "Items",
    params(ItemQuery),
    responses(
        (status = 200, description = "List of items", body = ItemListResponse),
        (status = 400, response = BadRequestArgumentResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_items<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    Query(query): Query<ItemQuery>,
) -> ItemResult<Json<ItemListResponse>> {
    let items = service.list_items(query).await?;
    Ok(Json(ItemListResponse {
        success: true,
        count: items.len(),
        data: items,
    }))
}

/// Create a new item
#[utoipa::path(
    post,
    path = "",
    tag = "Items",
    request_body = ItemPayload,
    responses(
        (status = 201, description = "Item created successfully", body = ItemResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    ValidatedJson(payload): ValidatedJson<ItemPayload>,
) -> ItemResult<impl IntoResponse> {
    let item = service.create_item(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(ItemResponse::with_message(item, "Item created successfully")),
    ))
}

/// Get an item by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = i64, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item found", body = ItemResponse),
        (status = 400, response = BadRequestArgumentResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    IdPath(id): IdPath,
) -> ItemResult<Json<ItemResponse>> {
    let item = service.get_item(id).await?;
    Ok(Json(ItemResponse::new(item)))
}

/// Replace an item
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = i64, Path, description = "Item ID")
    ),
    request_body = ItemPayload,
    responses(
        (status = 200, description = "Item updated successfully", body = ItemResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    IdPath(id): IdPath,
    ValidatedJson(payload): ValidatedJson<ItemPayload>,
) -> ItemResult<Json<ItemResponse>> {
    let item = service.update_item(id, payload).await?;
    Ok(Json(ItemResponse::with_message(item, "Item updated successfully")))
}

/// Delete an item
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = i64, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item deleted successfully", body = ItemResponse),
        (status = 400, response = BadRequestArgumentResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    IdPath(id): IdPath,
) -> ItemResult<Json<ItemResponse>> {
    let item = service.delete_item(id).await?;
    Ok(Json(ItemResponse::with_message(item, "Item deleted successfully")))
}

/// Full statistics report
#[utoipa::path(
    get,
    path = "",
    tag = "Stats",
    responses(
        (status = 200, description = "Statistics report", body = StatsReportResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn stats_report<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
) -> ItemResult<Json<StatsReportResponse>> {
    let data = service.stats_report().await?;
    Ok(Json(StatsReportResponse {
        success: true,
        data,
    }))
}

/// Quick item count and total value
#[utoipa::path(
    get,
    path = "/summary",
    tag = "Stats",
    responses(
        (status = 200, description = "Summary", body = SummaryResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn stats_summary<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
) -> ItemResult<Json<SummaryResponse>> {
    let data = service.stats_summary().await?;
    Ok(Json(SummaryResponse {
        success: true,
        data,
    }))
}
