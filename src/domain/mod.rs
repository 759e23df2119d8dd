//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `room` - Room aggregate and lifecycle (the shared voting context)
//! - `membership` - Room membership rows and roles
//! - `voting` - Vote tallies and the pure consensus rule
//! - `catalog` - Candidate metadata, cache entries, and default candidates

pub mod catalog;
pub mod foundation;
pub mod membership;
pub mod room;
pub mod voting;
