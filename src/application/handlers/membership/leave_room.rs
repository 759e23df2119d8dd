//! LeaveRoomHandler - Command handler for leaving a room.

use std::sync::Arc;
use tracing::warn;

use crate::domain::foundation::{
    CommandMetadata, EventId, RoomId, SerializableDomainEvent, Timestamp,
};
use crate::domain::room::{MemberLeft, RoomError};
use crate::ports::{EventPublisher, MembershipRepository, RoomRepository};

/// Command to leave a room.
#[derive(Debug, Clone)]
pub struct LeaveRoomCommand {
    pub room_id: RoomId,
}

/// Handler for leaving rooms.
///
/// Leaving deactivates the membership row rather than deleting it, so
/// the user can rejoin later and so the row's join history survives.
/// The leaver immediately stops counting toward the consensus
/// denominator; votes they already cast remain in the tallies.
pub struct LeaveRoomHandler {
    rooms: Arc<dyn RoomRepository>,
    memberships: Arc<dyn MembershipRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl LeaveRoomHandler {
    pub fn new(
        rooms: Arc<dyn RoomRepository>,
        memberships: Arc<dyn MembershipRepository>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            rooms,
            memberships,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: LeaveRoomCommand,
        metadata: CommandMetadata,
    ) -> Result<(), RoomError> {
        let user_id = metadata.user_id.clone();

        let mut membership = self
            .memberships
            .find(&cmd.room_id, &user_id)
            .await?
            .ok_or(RoomError::MembershipNotFound)?;

        // Idempotent: leaving twice is fine, but only the first leave
        // publishes an event.
        if !membership.is_active() {
            return Ok(());
        }

        membership.deactivate();
        self.memberships.save(&membership).await?;
        self.rooms.touch(&cmd.room_id).await?;

        let event = MemberLeft {
            event_id: EventId::new(),
            room_id: cmd.room_id,
            user_id,
            left_at: Timestamp::now(),
        };

        let envelope = event
            .to_envelope()
            .with_correlation_id(metadata.correlation_id())
            .with_user_id(metadata.user_id.to_string());

        // The deactivation is already saved; delivery is
        // fire-and-forget
        if let Err(e) = self.event_publisher.publish(envelope).await {
            warn!(room_id = %cmd.room_id, error = %e, "failed to publish member.left.v1");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::events::InMemoryEventBus;
    use crate::adapters::memory::{InMemoryMembershipRepository, InMemoryRoomRepository};
    use crate::domain::foundation::UserId;
    use crate::domain::membership::{MemberRole, Membership};
    use crate::domain::room::Room;

    struct Fixture {
        handler: LeaveRoomHandler,
        rooms: Arc<InMemoryRoomRepository>,
        memberships: Arc<InMemoryMembershipRepository>,
        bus: Arc<InMemoryEventBus>,
    }

    fn fixture() -> Fixture {
        let rooms = Arc::new(InMemoryRoomRepository::new());
        let memberships = Arc::new(InMemoryMembershipRepository::new());
        let bus = Arc::new(InMemoryEventBus::new());
        let handler = LeaveRoomHandler::new(
            Arc::clone(&rooms) as Arc<dyn RoomRepository>,
            Arc::clone(&memberships) as Arc<dyn MembershipRepository>,
            Arc::clone(&bus) as Arc<dyn EventPublisher>,
        );
        Fixture {
            handler,
            rooms,
            memberships,
            bus,
        }
    }

    async fn joined_room(fx: &Fixture, user: &UserId) -> Room {
        let room = Room::new(RoomId::new(), UserId::new("host-1").unwrap());
        fx.rooms.save(&room).await.unwrap();
        fx.memberships
            .save(&Membership::new(*room.id(), user.clone(), MemberRole::Member))
            .await
            .unwrap();
        room
    }

    fn metadata(user: &UserId) -> CommandMetadata {
        CommandMetadata::new(user.clone())
    }

    #[tokio::test]
    async fn leave_deactivates_membership_and_publishes() {
        let fx = fixture();
        let user = UserId::new("user-2").unwrap();
        let room = joined_room(&fx, &user).await;

        fx.handler
            .handle(LeaveRoomCommand { room_id: *room.id() }, metadata(&user))
            .await
            .unwrap();

        let membership = fx.memberships.find(room.id(), &user).await.unwrap().unwrap();
        assert!(!membership.is_active());
        assert_eq!(fx.memberships.count_active(room.id()).await.unwrap(), 0);
        assert!(fx.bus.has_event("member.left.v1"));
    }

    #[tokio::test]
    async fn double_leave_publishes_once() {
        let fx = fixture();
        let user = UserId::new("user-2").unwrap();
        let room = joined_room(&fx, &user).await;

        for _ in 0..2 {
            fx.handler
                .handle(LeaveRoomCommand { room_id: *room.id() }, metadata(&user))
                .await
                .unwrap();
        }

        assert_eq!(fx.bus.events_of_type("member.left.v1").len(), 1);
    }

    #[tokio::test]
    async fn publish_failure_still_deactivates() {
        let rooms = Arc::new(InMemoryRoomRepository::new());
        let memberships = Arc::new(InMemoryMembershipRepository::new());
        let bus = Arc::new(InMemoryEventBus::failing());
        let handler = LeaveRoomHandler::new(
            Arc::clone(&rooms) as Arc<dyn RoomRepository>,
            Arc::clone(&memberships) as Arc<dyn MembershipRepository>,
            Arc::clone(&bus) as Arc<dyn EventPublisher>,
        );

        let user = UserId::new("user-2").unwrap();
        let room = Room::new(RoomId::new(), UserId::new("host-1").unwrap());
        rooms.save(&room).await.unwrap();
        memberships
            .save(&Membership::new(*room.id(), user.clone(), MemberRole::Member))
            .await
            .unwrap();

        handler
            .handle(LeaveRoomCommand { room_id: *room.id() }, metadata(&user))
            .await
            .unwrap();

        assert_eq!(memberships.count_active(room.id()).await.unwrap(), 0);
        assert_eq!(bus.event_count(), 0);
    }

    #[tokio::test]
    async fn leaving_without_joining_is_not_found() {
        let fx = fixture();
        let user = UserId::new("user-2").unwrap();
        let room = Room::new(RoomId::new(), UserId::new("host-1").unwrap());
        fx.rooms.save(&room).await.unwrap();

        let err = fx
            .handler
            .handle(LeaveRoomCommand { room_id: *room.id() }, metadata(&user))
            .await
            .unwrap_err();
        assert!(matches!(err, RoomError::MembershipNotFound));
    }
}
