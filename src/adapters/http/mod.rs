//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure.

pub mod catalog;
pub mod middleware;
pub mod room;

// Re-export key types for convenience
pub use catalog::catalog_routes;
pub use catalog::CatalogHandlers;
pub use room::room_routes;
pub use room::RoomHandlers;
