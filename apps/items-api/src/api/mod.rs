//! API routes module

pub mod health;
pub mod items;

use axum::Router;
use axum_helpers::{create_router, health_router};

use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Create all routes served under `/api`
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/items", items::router(state))
        .nest("/stats", items::stats_router(state))
}

/// Full application: `/api` routes, docs, fallbacks and health endpoints
pub async fn app(state: &AppState) -> std::io::Result<Router> {
    let router = create_router::<ApiDoc>(routes(state)).await?;

    Ok(router
        .merge(health_router(state.config.app))
        .merge(health::router(state.clone())))
}
