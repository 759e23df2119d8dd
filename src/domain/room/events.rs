//! Room domain events.
//!
//! Events published when room lifecycle or voting occurrences happen:
//! - `RoomCreated` - New room created by a host
//! - `MemberJoined` - A user joined (or rejoined) the room
//! - `MemberLeft` - A member left the room
//! - `VoteRecorded` - A vote was counted for a candidate
//! - `RoomMatched` - Consensus reached; room is terminal
//!
//! Payloads carry already-validated values: `vote_count` is always the
//! authoritative post-increment count returned by the store, never a
//! locally recomputed figure.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{domain_event, CandidateId, EventId, RoomId, Timestamp, UserId};

// ════════════════════════════════════════════════════════════════════════════
// RoomCreated
// ════════════════════════════════════════════════════════════════════════════

/// Published when a new room is created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomCreated {
    /// Unique identifier for this event.
    pub event_id: EventId,

    /// ID of the created room.
    pub room_id: RoomId,

    /// User hosting the room.
    pub host_id: UserId,

    /// When the room was created.
    pub created_at: Timestamp,
}

domain_event!(
    RoomCreated,
    event_type = "room.created.v1",
    aggregate_id = room_id,
    aggregate_type = "Room",
    occurred_at = created_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// MemberJoined
// ════════════════════════════════════════════════════════════════════════════

/// Published when a user joins a room, or rejoins after leaving.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberJoined {
    /// Unique identifier for this event.
    pub event_id: EventId,

    /// Room that gained a member.
    pub room_id: RoomId,

    /// The joining user.
    pub user_id: UserId,

    /// True when an earlier membership row was reactivated.
    pub rejoined: bool,

    /// When the join occurred.
    pub joined_at: Timestamp,
}

domain_event!(
    MemberJoined,
    event_type = "member.joined.v1",
    aggregate_id = room_id,
    aggregate_type = "Room",
    occurred_at = joined_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// MemberLeft
// ════════════════════════════════════════════════════════════════════════════

/// Published when a member leaves a room.
///
/// The member's row is deactivated, not deleted, so they no longer
/// count toward the consensus denominator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberLeft {
    /// Unique identifier for this event.
    pub event_id: EventId,

    /// Room that lost a member.
    pub room_id: RoomId,

    /// The leaving user.
    pub user_id: UserId,

    /// When the leave occurred.
    pub left_at: Timestamp,
}

domain_event!(
    MemberLeft,
    event_type = "member.left.v1",
    aggregate_id = room_id,
    aggregate_type = "Room",
    occurred_at = left_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// VoteRecorded
// ════════════════════════════════════════════════════════════════════════════

/// Published when a vote is counted for a candidate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoteRecorded {
    /// Unique identifier for this event.
    pub event_id: EventId,

    /// Room the vote was cast in.
    pub room_id: RoomId,

    /// The voting user.
    pub user_id: UserId,

    /// Candidate the vote was cast for.
    pub candidate_id: CandidateId,

    /// Authoritative post-increment tally from the store.
    pub vote_count: u64,

    /// When the vote was recorded.
    pub recorded_at: Timestamp,
}

domain_event!(
    VoteRecorded,
    event_type = "vote.recorded.v1",
    aggregate_id = room_id,
    aggregate_type = "Room",
    occurred_at = recorded_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// RoomMatched
// ════════════════════════════════════════════════════════════════════════════

/// Published exactly once per room, by the caller whose conditional
/// match transition actually applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomMatched {
    /// Unique identifier for this event.
    pub event_id: EventId,

    /// The matched room.
    pub room_id: RoomId,

    /// The winning candidate.
    pub candidate_id: CandidateId,

    /// Vote count at the moment the threshold was crossed.
    pub vote_count: u64,

    /// Active members at evaluation time (the denominator used).
    pub active_member_count: u64,

    /// When the match occurred.
    pub matched_at: Timestamp,
}

domain_event!(
    RoomMatched,
    event_type = "room.matched.v1",
    aggregate_id = room_id,
    aggregate_type = "Room",
    occurred_at = matched_at,
    event_id = event_id
);
