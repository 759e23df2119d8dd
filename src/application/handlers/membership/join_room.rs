//! JoinRoomHandler - Command handler for joining (or rejoining) a room.

use std::sync::Arc;
use tracing::warn;

use crate::domain::foundation::{CommandMetadata, EventId, RoomId, SerializableDomainEvent};
use crate::domain::membership::{MemberRole, Membership};
use crate::domain::room::{MemberJoined, RoomError};
use crate::ports::{EventPublisher, MembershipRepository, RoomRepository};

/// Command to join a room.
#[derive(Debug, Clone)]
pub struct JoinRoomCommand {
    pub room_id: RoomId,
}

/// Result of a successful join.
#[derive(Debug, Clone)]
pub struct JoinRoomResult {
    pub membership: Membership,
    /// True when a previously left member was reactivated.
    pub rejoined: bool,
}

/// Handler for joining rooms.
///
/// A returning user's existing row is reactivated, keeping the
/// one-row-per-(room, user) invariant. Joining an already-matched room
/// is allowed; the new member simply sees the result.
pub struct JoinRoomHandler {
    rooms: Arc<dyn RoomRepository>,
    memberships: Arc<dyn MembershipRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl JoinRoomHandler {
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
        cmd: JoinRoomCommand,
        metadata: CommandMetadata,
    ) -> Result<JoinRoomResult, RoomError> {
        // 1. The room must exist
        let room = self
            .rooms
            .find_by_id(&cmd.room_id)
            .await?
            .ok_or(RoomError::NotFound(cmd.room_id))?;

        // 2. Reactivate an existing row, or insert a fresh one
        let user_id = metadata.user_id.clone();
        let (membership, rejoined) = match self.memberships.find(&cmd.room_id, &user_id).await? {
            Some(mut existing) => {
                let was_inactive = existing.reactivate();
                (existing, was_inactive)
            }
            None => (
                Membership::new(cmd.room_id, user_id.clone(), MemberRole::Member),
                false,
            ),
        };
        self.memberships.save(&membership).await?;
        self.rooms.touch(room.id()).await?;

        // 3. Publish the join event
        let event = MemberJoined {
            event_id: EventId::new(),
            room_id: cmd.room_id,
            user_id,
            rejoined,
            joined_at: *membership.joined_at(),
        };

        let envelope = event
            .to_envelope()
            .with_correlation_id(metadata.correlation_id())
            .with_user_id(metadata.user_id.to_string());

        // The membership row is already saved; delivery is
        // fire-and-forget
        if let Err(e) = self.event_publisher.publish(envelope).await {
            warn!(room_id = %cmd.room_id, error = %e, "failed to publish member.joined.v1");
        }

        Ok(JoinRoomResult { membership, rejoined })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::events::InMemoryEventBus;
    use crate::adapters::memory::{InMemoryMembershipRepository, InMemoryRoomRepository};
    use crate::domain::foundation::UserId;
    use crate::domain::room::Room;

    struct Fixture {
        handler: JoinRoomHandler,
        rooms: Arc<InMemoryRoomRepository>,
        memberships: Arc<InMemoryMembershipRepository>,
        bus: Arc<InMemoryEventBus>,
    }

    fn fixture() -> Fixture {
        let rooms = Arc::new(InMemoryRoomRepository::new());
        let memberships = Arc::new(InMemoryMembershipRepository::new());
        let bus = Arc::new(InMemoryEventBus::new());
        let handler = JoinRoomHandler::new(
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

    async fn stored_room(fx: &Fixture) -> Room {
        let room = Room::new(RoomId::new(), UserId::new("host-1").unwrap());
        fx.rooms.save(&room).await.unwrap();
        room
    }

    fn metadata(user: &str) -> CommandMetadata {
        CommandMetadata::new(UserId::new(user).unwrap())
    }

    #[tokio::test]
    async fn first_join_creates_active_membership() {
        let fx = fixture();
        let room = stored_room(&fx).await;

        let result = fx
            .handler
            .handle(JoinRoomCommand { room_id: *room.id() }, metadata("user-2"))
            .await
            .unwrap();

        assert!(result.membership.is_active());
        assert!(!result.rejoined);
        assert_eq!(fx.memberships.count_active(room.id()).await.unwrap(), 1);

        let events = fx.bus.events_of_type("member.joined.v1");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].payload["rejoined"], false);
    }

    #[tokio::test]
    async fn rejoin_reactivates_instead_of_duplicating() {
        let fx = fixture();
        let room = stored_room(&fx).await;
        let user = UserId::new("user-2").unwrap();

        let mut membership = Membership::new(*room.id(), user.clone(), MemberRole::Member);
        membership.deactivate();
        fx.memberships.save(&membership).await.unwrap();

        let result = fx
            .handler
            .handle(JoinRoomCommand { room_id: *room.id() }, metadata("user-2"))
            .await
            .unwrap();

        assert!(result.rejoined);
        assert_eq!(fx.memberships.count_active(room.id()).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn joining_when_already_active_is_idempotent() {
        let fx = fixture();
        let room = stored_room(&fx).await;

        for _ in 0..2 {
            fx.handler
                .handle(JoinRoomCommand { room_id: *room.id() }, metadata("user-2"))
                .await
                .unwrap();
        }

        assert_eq!(fx.memberships.count_active(room.id()).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn publish_failure_does_not_fail_the_join() {
        let rooms = Arc::new(InMemoryRoomRepository::new());
        let memberships = Arc::new(InMemoryMembershipRepository::new());
        let bus = Arc::new(InMemoryEventBus::failing());
        let handler = JoinRoomHandler::new(
            Arc::clone(&rooms) as Arc<dyn RoomRepository>,
            Arc::clone(&memberships) as Arc<dyn MembershipRepository>,
            Arc::clone(&bus) as Arc<dyn EventPublisher>,
        );

        let room = Room::new(RoomId::new(), UserId::new("host-1").unwrap());
        rooms.save(&room).await.unwrap();

        handler
            .handle(JoinRoomCommand { room_id: *room.id() }, metadata("user-2"))
            .await
            .unwrap();

        assert_eq!(memberships.count_active(room.id()).await.unwrap(), 1);
        assert_eq!(bus.event_count(), 0);
    }

    #[tokio::test]
    async fn joining_unknown_room_fails() {
        let fx = fixture();
        let err = fx
            .handler
            .handle(JoinRoomCommand { room_id: RoomId::new() }, metadata("user-2"))
            .await
            .unwrap_err();
        assert!(matches!(err, RoomError::NotFound(_)));
        assert_eq!(fx.bus.event_count(), 0);
    }
}
