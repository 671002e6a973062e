//! Items and stats API routes

use axum::Router;
use domain_items::handlers;

use crate::state::AppState;

/// Create items router
pub fn router(state: &AppState) -> Router {
    handlers::router(state.service.clone())
}

/// Create stats router, sharing the items service and its write gate
pub fn stats_router(state: &AppState) -> Router {
    handlers::stats_router(state.service.clone())
}
