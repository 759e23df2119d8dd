//! GetRoomHandler - Query handler for reading room state.

use std::sync::Arc;

use crate::domain::foundation::RoomId;
use crate::domain::room::{Room, RoomError};
use crate::ports::{MembershipRepository, RoomRepository};

/// Room state plus the live active-member count, for display.
#[derive(Debug, Clone)]
pub struct RoomView {
    pub room: Room,
    pub active_member_count: u64,
}

/// Handler for reading a room.
pub struct GetRoomHandler {
    rooms: Arc<dyn RoomRepository>,
    memberships: Arc<dyn MembershipRepository>,
}

impl GetRoomHandler {
    pub fn new(rooms: Arc<dyn RoomRepository>, memberships: Arc<dyn MembershipRepository>) -> Self {
        Self { rooms, memberships }
    }

    pub async fn handle(&self, room_id: RoomId) -> Result<RoomView, RoomError> {
        let room = self
            .rooms
            .find_by_id(&room_id)
            .await?
            .ok_or(RoomError::NotFound(room_id))?;

        let active_member_count = self.memberships.count_active(&room_id).await?;

        Ok(RoomView {
            room,
            active_member_count,
        })
    }
}
