//! Membership aggregate entity.
//!
//! One row per (room, user) pair - rejoining reactivates the existing
//! row rather than inserting a duplicate. Inactive members are excluded
//! from vote eligibility and from the consensus denominator.

use crate::domain::membership::MemberRole;
use crate::domain::foundation::{RoomId, Timestamp, UserId};
use serde::{Deserialize, Serialize};

/// A user's membership in a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Membership {
    /// Room this membership belongs to.
    room_id: RoomId,

    /// The member.
    user_id: UserId,

    /// Role within the room.
    role: MemberRole,

    /// False once the member has left.
    is_active: bool,

    /// When the user first joined.
    joined_at: Timestamp,
}

impl Membership {
    /// Create a new active membership.
    pub fn new(room_id: RoomId, user_id: UserId, role: MemberRole) -> Self {
        Self {
            room_id,
            user_id,
            role,
            is_active: true,
            joined_at: Timestamp::now(),
        }
    }

    /// Reconstitute a membership from persistence.
    pub fn reconstitute(
        room_id: RoomId,
        user_id: UserId,
        role: MemberRole,
        is_active: bool,
        joined_at: Timestamp,
    ) -> Self {
        Self {
            room_id,
            user_id,
            role,
            is_active,
            joined_at,
        }
    }

    /// Returns the room ID.
    pub fn room_id(&self) -> &RoomId {
        &self.room_id
    }

    /// Returns the member's user ID.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Returns the member's role.
    pub fn role(&self) -> MemberRole {
        self.role
    }

    /// Returns true while the member participates in consensus.
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Returns when the user first joined.
    pub fn joined_at(&self) -> &Timestamp {
        &self.joined_at
    }

    /// Mark the member as having left. Idempotent.
    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    /// Reactivate a membership on rejoin. Idempotent.
    ///
    /// Returns true if the row was previously inactive.
    pub fn reactivate(&mut self) -> bool {
        let was_inactive = !self.is_active;
        self.is_active = true;
        was_inactive
    }
}
