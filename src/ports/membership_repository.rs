//! MembershipRepository port - persistence for membership rows.
//!
//! At most one row exists per (room, user) pair. `save` is an upsert on
//! that composite key so a rejoin reactivates rather than duplicates.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, RoomId, UserId};
use crate::domain::membership::Membership;

/// Port for membership persistence.
#[async_trait]
pub trait MembershipRepository: Send + Sync {
    /// Find the membership row for a (room, user) pair.
    async fn find(
        &self,
        room_id: &RoomId,
        user_id: &UserId,
    ) -> Result<Option<Membership>, DomainError>;

    /// Insert or replace the row for (room, user).
    async fn save(&self, membership: &Membership) -> Result<(), DomainError>;

    /// Count active members of a room - the consensus denominator,
    /// read live at evaluation time.
    async fn count_active(&self, room_id: &RoomId) -> Result<u64, DomainError>;

    /// List active members of a room.
    async fn list_active(&self, room_id: &RoomId) -> Result<Vec<Membership>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Compile-time check that trait is object-safe
    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn MembershipRepository) {}
}
