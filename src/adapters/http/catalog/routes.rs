//! HTTP routes for catalog endpoints.

use axum::{routing::get, Router};

use super::handlers::{list_candidates, CatalogHandlers};

/// Creates the catalog router with all endpoints.
pub fn catalog_routes(handlers: CatalogHandlers) -> Router {
    Router::new()
        .route("/", get(list_candidates))
        .with_state(handlers)
}
