//! HTTP adapter for catalog endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::CatalogHandlers;
pub use routes::catalog_routes;
