//! EvaluateConsensusHandler - threshold check and match transition.
//!
//! Runs after every counted vote. The denominator (active member count)
//! is read live at evaluation time, so members who left since the vote
//! was cast no longer hold up a match.
//!
//! When the threshold is met the handler attempts the store-level
//! conditional transition. Under concurrency several callers may pass
//! the threshold check, but the store applies exactly one transition;
//! only that winner publishes `room.matched.v1`. Losers still return
//! the authoritative room state, which may name a different winning
//! candidate.

use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::foundation::{
    CandidateId, CommandMetadata, ErrorCode, EventId, RoomId, RoomStatus,
    SerializableDomainEvent, Timestamp,
};
use crate::domain::room::{Room, RoomMatched};
use crate::domain::voting::{consensus_reached, VoteError};
use crate::ports::{EventPublisher, MembershipRepository, RoomRepository};

/// Outcome of a consensus evaluation.
#[derive(Debug, Clone)]
pub struct ConsensusOutcome {
    /// True when the room is Matched after this evaluation (whether or
    /// not this caller's transition won).
    pub matched: bool,

    /// Authoritative room state after evaluation, when a transition
    /// was attempted. `None` when the threshold was not met.
    pub room: Option<Room>,
}

/// Handler evaluating the consensus rule after a counted vote.
pub struct EvaluateConsensusHandler {
    rooms: Arc<dyn RoomRepository>,
    memberships: Arc<dyn MembershipRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl EvaluateConsensusHandler {
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
        room_id: RoomId,
        candidate_id: CandidateId,
        vote_count: u64,
        metadata: &CommandMetadata,
    ) -> Result<ConsensusOutcome, VoteError> {
        let active_member_count = self.memberships.count_active(&room_id).await?;

        if !consensus_reached(vote_count, active_member_count) {
            return Ok(ConsensusOutcome {
                matched: false,
                room: None,
            });
        }

        // A vote can outlive its room (orphaned membership row); that
        // is a fatal not-found, not a retryable store failure.
        let transition = self
            .rooms
            .complete_match(&room_id, &candidate_id)
            .await
            .map_err(|err| match err.code {
                ErrorCode::RoomNotFound => VoteError::RoomNotFound(room_id),
                _ => err.into(),
            })?;

        if transition.applied {
            info!(
                room_id = %room_id,
                candidate_id = %candidate_id,
                vote_count,
                active_member_count,
                "room matched"
            );

            let event = RoomMatched {
                event_id: EventId::new(),
                room_id,
                candidate_id,
                vote_count,
                active_member_count,
                matched_at: Timestamp::now(),
            };

            let envelope = event
                .to_envelope()
                .with_correlation_id(metadata.correlation_id())
                .with_user_id(metadata.user_id.to_string());

            // The transition is already durable; delivery is
            // fire-and-forget
            if let Err(e) = self.event_publisher.publish(envelope).await {
                warn!(room_id = %room_id, error = %e, "failed to publish room.matched.v1");
            }
        }

        let matched = transition.room.status() == RoomStatus::Matched;
        Ok(ConsensusOutcome {
            matched,
            room: Some(transition.room),
        })
    }
}
