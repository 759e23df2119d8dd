//! In-memory implementation of RoomRepository.
//!
//! # Panics
//!
//! Methods panic if the internal lock is poisoned. Acceptable for test
//! code; production uses the PostgreSQL adapter.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::foundation::{CandidateId, DomainError, ErrorCode, RoomId};
use crate::domain::room::Room;
use crate::ports::{MatchTransition, RoomRepository};

/// In-memory room store.
///
/// `complete_match` performs its status check and mutation under one
/// lock acquisition, giving the same exactly-one-winner guarantee as
/// the store's conditional update.
#[derive(Default)]
pub struct InMemoryRoomRepository {
    rooms: Mutex<HashMap<RoomId, Room>>,
}

impl InMemoryRoomRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored rooms (for test assertions).
    pub fn room_count(&self) -> usize {
        self.rooms
            .lock()
            .expect("InMemoryRoomRepository: lock poisoned")
            .len()
    }
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    async fn save(&self, room: &Room) -> Result<(), DomainError> {
        self.rooms
            .lock()
            .expect("InMemoryRoomRepository: lock poisoned")
            .insert(*room.id(), room.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &RoomId) -> Result<Option<Room>, DomainError> {
        Ok(self
            .rooms
            .lock()
            .expect("InMemoryRoomRepository: lock poisoned")
            .get(id)
            .cloned())
    }

    async fn complete_match(
        &self,
        id: &RoomId,
        candidate_id: &CandidateId,
    ) -> Result<MatchTransition, DomainError> {
        let mut rooms = self
            .rooms
            .lock()
            .expect("InMemoryRoomRepository: lock poisoned");

        let room = rooms.get_mut(id).ok_or_else(|| {
            DomainError::new(ErrorCode::RoomNotFound, format!("Room not found: {}", id))
        })?;

        let applied = room.complete_match(candidate_id.clone()).is_ok();
        Ok(MatchTransition {
            room: room.clone(),
            applied,
        })
    }

    async fn touch(&self, id: &RoomId) -> Result<(), DomainError> {
        let mut rooms = self
            .rooms
            .lock()
            .expect("InMemoryRoomRepository: lock poisoned");

        let room = rooms.get_mut(id).ok_or_else(|| {
            DomainError::new(ErrorCode::RoomNotFound, format!("Room not found: {}", id))
        })?;
        room.touch();
        Ok(())
    }
}
