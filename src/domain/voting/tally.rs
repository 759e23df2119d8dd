//! Vote tally value object.
//!
//! One row per (room, candidate). The count is authoritative only when
//! it comes from the store's atomic increment - this type never offers
//! a read-modify-write path.

use crate::domain::foundation::{CandidateId, RoomId, Timestamp};
use serde::{Deserialize, Serialize};

/// Aggregated vote count for a candidate within a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteTally {
    /// Room the tally belongs to.
    pub room_id: RoomId,

    /// Candidate being counted.
    pub candidate_id: CandidateId,

    /// Monotonically non-decreasing vote count.
    pub votes: u64,

    /// When the tally was last incremented.
    pub updated_at: Timestamp,
}

impl VoteTally {
    /// Creates a tally snapshot as read back from the store.
    pub fn new(room_id: RoomId, candidate_id: CandidateId, votes: u64) -> Self {
        Self {
            room_id,
            candidate_id,
            votes,
            updated_at: Timestamp::now(),
        }
    }
}
