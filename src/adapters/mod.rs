//! Adapters - Implementations of ports.
//!
//! - `memory` - In-process adapters with store-equivalent atomicity,
//!   for tests and local development
//! - `postgres` - PostgreSQL adapters built on the database's atomic
//!   conditional-write primitives
//! - `events` - Event bus adapters (in-memory capture, Redis pub/sub)
//! - `catalog` - HTTP adapter for the external metadata source
//! - `http` - REST API surface

pub mod catalog;
pub mod events;
pub mod http;
pub mod memory;
pub mod postgres;
