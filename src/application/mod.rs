//! Application layer - command and query handlers.
//!
//! Handlers orchestrate domain logic and ports (CQRS-style). Each
//! handler takes a command plus `CommandMetadata` and returns a typed
//! result, publishing domain events after successful persistence.

pub mod handlers;
