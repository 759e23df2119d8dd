//! CheckMembershipHandler - membership validation for protected actions.
//!
//! Membership lookups fail closed: a store error yields "not a member"
//! rather than letting a degraded store authorize writes. The resulting
//! `Unauthorized` hides whether the room exists, which is intentional
//! for non-members.

use std::sync::Arc;
use tracing::warn;

use crate::domain::foundation::{RoomId, UserId};
use crate::ports::MembershipRepository;

/// Handler answering "may this user act in this room?".
pub struct CheckMembershipHandler {
    memberships: Arc<dyn MembershipRepository>,
}

impl CheckMembershipHandler {
    pub fn new(memberships: Arc<dyn MembershipRepository>) -> Self {
        Self { memberships }
    }

    /// Returns true only for an existing, active membership row.
    ///
    /// Never returns an error: missing rows, inactive rows, and store
    /// failures all answer false.
    pub async fn is_active_member(&self, room_id: &RoomId, user_id: &UserId) -> bool {
        match self.memberships.find(room_id, user_id).await {
            Ok(Some(membership)) => membership.is_active(),
            Ok(None) => false,
            Err(err) => {
                warn!(
                    room_id = %room_id,
                    user_id = %user_id,
                    error = %err,
                    "membership lookup failed, treating user as non-member"
                );
                false
            }
        }
    }
}
