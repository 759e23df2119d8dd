//! CreateRoomHandler - Command handler for creating new rooms.

use std::sync::Arc;
use tracing::warn;

use crate::domain::foundation::{
    CommandMetadata, EventId, RoomId, SerializableDomainEvent, UserId,
};
use crate::domain::membership::{MemberRole, Membership};
use crate::domain::room::{Room, RoomCreated, RoomError};
use crate::ports::{EventPublisher, MembershipRepository, RoomRepository};

/// Command to create a new room.
#[derive(Debug, Clone)]
pub struct CreateRoomCommand {
    pub host_id: UserId,
}

/// Result of successful room creation.
#[derive(Debug, Clone)]
pub struct CreateRoomResult {
    pub room: Room,
    pub event: RoomCreated,
}

/// Handler for creating rooms.
///
/// The host becomes the room's first active member, so a one-person
/// room can match immediately on the host's own vote.
pub struct CreateRoomHandler {
    rooms: Arc<dyn RoomRepository>,
    memberships: Arc<dyn MembershipRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl CreateRoomHandler {
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
        cmd: CreateRoomCommand,
        metadata: CommandMetadata,
    ) -> Result<CreateRoomResult, RoomError> {
        // 1. Create the room aggregate
        let room = Room::new(RoomId::new(), cmd.host_id.clone());
        self.rooms.save(&room).await?;

        // 2. The host joins their own room as an active member
        let membership = Membership::new(*room.id(), cmd.host_id.clone(), MemberRole::Host);
        self.memberships.save(&membership).await?;

        // 3. Publish the creation event
        let event = RoomCreated {
            event_id: EventId::new(),
            room_id: *room.id(),
            host_id: cmd.host_id,
            created_at: *room.created_at(),
        };

        let envelope = event
            .to_envelope()
            .with_correlation_id(metadata.correlation_id())
            .with_user_id(metadata.user_id.to_string());

        // The room is already saved; delivery is fire-and-forget
        if let Err(e) = self.event_publisher.publish(envelope).await {
            warn!(room_id = %room.id(), error = %e, "failed to publish room.created.v1");
        }

        Ok(CreateRoomResult { room, event })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::events::InMemoryEventBus;
    use crate::adapters::memory::{InMemoryMembershipRepository, InMemoryRoomRepository};
    use crate::domain::foundation::RoomStatus;

    fn handler() -> (
        CreateRoomHandler,
        Arc<InMemoryRoomRepository>,
        Arc<InMemoryMembershipRepository>,
        Arc<InMemoryEventBus>,
    ) {
        let rooms = Arc::new(InMemoryRoomRepository::new());
        let memberships = Arc::new(InMemoryMembershipRepository::new());
        let bus = Arc::new(InMemoryEventBus::new());
        let handler = CreateRoomHandler::new(
            Arc::clone(&rooms) as Arc<dyn RoomRepository>,
            Arc::clone(&memberships) as Arc<dyn MembershipRepository>,
            Arc::clone(&bus) as Arc<dyn EventPublisher>,
        );
        (handler, rooms, memberships, bus)
    }

    fn metadata(user: &UserId) -> CommandMetadata {
        CommandMetadata::new(user.clone())
    }

    #[tokio::test]
    async fn creates_open_room_with_host_membership() {
        let (handler, rooms, memberships, _) = handler();
        let host = UserId::new("host-1").unwrap();

        let result = handler
            .handle(CreateRoomCommand { host_id: host.clone() }, metadata(&host))
            .await
            .unwrap();

        assert_eq!(result.room.status(), RoomStatus::Open);
        assert!(result.room.is_host(&host));

        let stored = rooms.find_by_id(result.room.id()).await.unwrap();
        assert!(stored.is_some());

        let member = memberships
            .find(result.room.id(), &host)
            .await
            .unwrap()
            .unwrap();
        assert!(member.is_active());
        assert_eq!(member.role(), MemberRole::Host);
    }

    #[tokio::test]
    async fn publishes_room_created_event() {
        let (handler, _, _, bus) = handler();
        let host = UserId::new("host-1").unwrap();

        let result = handler
            .handle(CreateRoomCommand { host_id: host.clone() }, metadata(&host))
            .await
            .unwrap();

        let events = bus.events_of_type("room.created.v1");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].aggregate_id, result.room.id().to_string());
        assert_eq!(events[0].metadata.user_id, Some("host-1".to_string()));
    }

    #[tokio::test]
    async fn publish_failure_does_not_fail_creation() {
        let rooms = Arc::new(InMemoryRoomRepository::new());
        let memberships = Arc::new(InMemoryMembershipRepository::new());
        let bus = Arc::new(InMemoryEventBus::failing());
        let handler = CreateRoomHandler::new(
            Arc::clone(&rooms) as Arc<dyn RoomRepository>,
            Arc::clone(&memberships) as Arc<dyn MembershipRepository>,
            Arc::clone(&bus) as Arc<dyn EventPublisher>,
        );
        let host = UserId::new("host-1").unwrap();

        let result = handler
            .handle(CreateRoomCommand { host_id: host.clone() }, metadata(&host))
            .await
            .unwrap();

        // The room and membership are durable despite the dead bus
        assert!(rooms.find_by_id(result.room.id()).await.unwrap().is_some());
        assert_eq!(memberships.count_active(result.room.id()).await.unwrap(), 1);
        assert_eq!(bus.event_count(), 0);
    }

    #[tokio::test]
    async fn host_counts_toward_consensus_denominator() {
        let (handler, _, memberships, _) = handler();
        let host = UserId::new("host-1").unwrap();

        let result = handler
            .handle(CreateRoomCommand { host_id: host.clone() }, metadata(&host))
            .await
            .unwrap();

        assert_eq!(memberships.count_active(result.room.id()).await.unwrap(), 1);
    }
}
