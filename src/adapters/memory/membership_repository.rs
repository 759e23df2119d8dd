//! In-memory implementation of MembershipRepository.
//!
//! # Panics
//!
//! Methods panic if the internal lock is poisoned. Acceptable for test
//! code; production uses the PostgreSQL adapter.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::foundation::{DomainError, RoomId, UserId};
use crate::domain::membership::Membership;
use crate::ports::MembershipRepository;

/// In-memory membership store keyed by (room, user).
#[derive(Default)]
pub struct InMemoryMembershipRepository {
    rows: Mutex<HashMap<(RoomId, UserId), Membership>>,
}

impl InMemoryMembershipRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MembershipRepository for InMemoryMembershipRepository {
    async fn find(
        &self,
        room_id: &RoomId,
        user_id: &UserId,
    ) -> Result<Option<Membership>, DomainError> {
        Ok(self
            .rows
            .lock()
            .expect("InMemoryMembershipRepository: lock poisoned")
            .get(&(*room_id, user_id.clone()))
            .cloned())
    }

    async fn save(&self, membership: &Membership) -> Result<(), DomainError> {
        self.rows
            .lock()
            .expect("InMemoryMembershipRepository: lock poisoned")
            .insert(
                (*membership.room_id(), membership.user_id().clone()),
                membership.clone(),
            );
        Ok(())
    }

    async fn count_active(&self, room_id: &RoomId) -> Result<u64, DomainError> {
        Ok(self
            .rows
            .lock()
            .expect("InMemoryMembershipRepository: lock poisoned")
            .values()
            .filter(|m| m.room_id() == room_id && m.is_active())
            .count() as u64)
    }

    async fn list_active(&self, room_id: &RoomId) -> Result<Vec<Membership>, DomainError> {
        Ok(self
            .rows
            .lock()
            .expect("InMemoryMembershipRepository: lock poisoned")
            .values()
            .filter(|m| m.room_id() == room_id && m.is_active())
            .cloned()
            .collect())
    }
}
