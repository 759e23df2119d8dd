//! Caller identity extraction for axum.
//!
//! Identity arrives pre-authenticated from the gateway in the
//! `x-user-id` header; this layer only extracts and validates shape.
//! A missing or empty header is rejected with 401 before any handler
//! runs.
//!
//! # Example
//!
//! ```ignore
//! async fn my_handler(RequireUser(user_id): RequireUser) -> String {
//!     format!("Hello, {}!", user_id)
//! }
//! ```

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::domain::foundation::UserId;

/// Header carrying the authenticated caller's ID.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Extractor that requires a caller identity.
#[derive(Debug, Clone)]
pub struct RequireUser(pub UserId);

impl<S> axum::extract::FromRequestParts<S> for RequireUser
where
    S: Send + Sync,
{
    type Rejection = IdentityRejection;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            parts
                .headers
                .get(USER_ID_HEADER)
                .and_then(|h| h.to_str().ok())
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .and_then(|v| UserId::new(v).ok())
                .map(RequireUser)
                .ok_or(IdentityRejection::MissingUserId)
        })
    }
}

/// Rejection type for identity failures.
#[derive(Debug, Clone)]
pub enum IdentityRejection {
    /// The x-user-id header was absent, empty, or unreadable.
    MissingUserId,
}

impl IntoResponse for IdentityRejection {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            IdentityRejection::MissingUserId => {
                (StatusCode::UNAUTHORIZED, "Caller identity required")
            }
        };

        (
            status,
            Json(serde_json::json!({
                "error": message,
                "code": "UNAUTHORIZED"
            })),
        )
            .into_response()
    }
}
