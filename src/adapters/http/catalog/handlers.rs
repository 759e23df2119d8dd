//! HTTP handlers for catalog endpoints.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::middleware::RequireUser;
use crate::application::handlers::catalog::ResolveCandidatesHandler;
use crate::domain::catalog::FilterKey;

use super::dto::{CandidateListResponse, ListCandidatesQuery};

#[derive(Clone)]
pub struct CatalogHandlers {
    resolve_handler: Arc<ResolveCandidatesHandler>,
}

impl CatalogHandlers {
    pub fn new(resolve_handler: Arc<ResolveCandidatesHandler>) -> Self {
        Self { resolve_handler }
    }
}

/// GET /api/candidates - List candidates for a filter
///
/// Resolution never fails: the fallback chain bottoms out at the
/// built-in default set, so this endpoint always returns 200 with a
/// non-empty list.
pub async fn list_candidates(
    State(handlers): State<CatalogHandlers>,
    RequireUser(_user_id): RequireUser,
    Query(query): Query<ListCandidatesQuery>,
) -> Response {
    let key = query
        .filter
        .as_deref()
        .and_then(|f| FilterKey::new(f).ok())
        .unwrap_or_else(FilterKey::default_set);

    let resolved = handlers.resolve_handler.handle(key).await;
    let response: CandidateListResponse = resolved.into();
    (StatusCode::OK, Json(response)).into_response()
}
