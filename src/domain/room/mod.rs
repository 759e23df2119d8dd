//! Room domain module - the shared group voting context.

mod aggregate;
mod errors;
mod events;

pub use aggregate::Room;
pub use errors::RoomError;
pub use events::{MemberJoined, MemberLeft, RoomCreated, RoomMatched, VoteRecorded};
