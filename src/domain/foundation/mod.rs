//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the Reelmatch domain.

mod command;
mod errors;
mod events;
mod ids;
mod room_status;
mod timestamp;

pub use command::CommandMetadata;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use events::{
    domain_event, DomainEvent, EventEnvelope, EventId, EventMetadata, SerializableDomainEvent,
};
pub use ids::{CandidateId, RoomId, UserId};
pub use room_status::RoomStatus;
pub use timestamp::Timestamp;
