//! VoteTallyRepository port - atomic vote counting.
//!
//! Tallies are mutated only through `increment`, the store's atomic
//! add-or-create primitive. No implementation may read-then-write the
//! count: if two first-time votes for the same candidate race, exactly
//! one creates the row and the other's increment applies to it.

use async_trait::async_trait;

use crate::domain::foundation::{CandidateId, DomainError, RoomId};
use crate::domain::voting::VoteTally;

/// Port for vote tally persistence.
#[async_trait]
pub trait VoteTallyRepository: Send + Sync {
    /// Atomically increment the tally for (room, candidate) by one,
    /// creating the row with value 1 if absent.
    ///
    /// Returns the authoritative post-increment count from the store
    /// response, never a locally computed guess.
    async fn increment(
        &self,
        room_id: &RoomId,
        candidate_id: &CandidateId,
    ) -> Result<u64, DomainError>;

    /// Read the current tally, if any votes have been cast.
    async fn get(
        &self,
        room_id: &RoomId,
        candidate_id: &CandidateId,
    ) -> Result<Option<VoteTally>, DomainError>;
}
