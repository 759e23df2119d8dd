//! RoomRepository port - persistence for Room aggregates.
//!
//! The one non-obvious operation is `complete_match`: it is the single
//! place room status may move to Matched, and implementations must make
//! it a store-level conditional write (compare-and-swap on status), not
//! a read-modify-write pair. Two candidates racing past their threshold
//! resolve to exactly one winner through this guard.

use async_trait::async_trait;

use crate::domain::foundation::{CandidateId, DomainError, RoomId};
use crate::domain::room::Room;

/// Outcome of a conditional match transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchTransition {
    /// The authoritative post-update room row. When `applied` is false
    /// this is whatever state a concurrent writer left behind.
    pub room: Room,

    /// True when this call's conditional update is the one that moved
    /// the room to Matched. Exactly one caller per room observes true.
    pub applied: bool,
}

/// Port for room persistence.
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Persist a new room.
    async fn save(&self, room: &Room) -> Result<(), DomainError>;

    /// Find a room by ID.
    async fn find_by_id(&self, id: &RoomId) -> Result<Option<Room>, DomainError>;

    /// Atomically transition the room to Matched with the given winner,
    /// only if its current status still accepts votes.
    ///
    /// Always returns the post-update row so callers see authoritative
    /// state even when they lost the race.
    ///
    /// # Errors
    ///
    /// - `RoomNotFound` if the room row is missing (fatal)
    /// - `StoreUnavailable` on infrastructure failure
    async fn complete_match(
        &self,
        id: &RoomId,
        candidate_id: &CandidateId,
    ) -> Result<MatchTransition, DomainError>;

    /// Bump the room's `updated_at` after a membership change.
    async fn touch(&self, id: &RoomId) -> Result<(), DomainError>;
}
