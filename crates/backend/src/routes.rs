use axum::{routing::get, Router};

use crate::domain::a001_tool_listing::ListingState;
use crate::handlers;

/// Конфигурация всех роутов приложения
pub fn configure_routes(listing: ListingState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // A001 Tool listing
        .route("/api/tools", get(handlers::a001_tool_listing::list_tools))
        .with_state(listing)
}
