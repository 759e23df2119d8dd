//! CastVoteHandler - Command handler for casting a vote.
//!
//! The write path is: membership guard, room status check, atomic
//! tally increment, consensus evaluation. The status check is advisory
//! (it rejects most late votes cheaply); the conditional transition in
//! the room store is what actually guarantees a single winner.

use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::foundation::{
    CandidateId, CommandMetadata, EventId, RoomId, SerializableDomainEvent, Timestamp,
};
use crate::domain::room::{Room, VoteRecorded};
use crate::domain::voting::VoteError;
use crate::ports::{EventPublisher, MembershipRepository, RoomRepository, VoteTallyRepository};

use crate::application::handlers::membership::CheckMembershipHandler;
use crate::application::handlers::voting::EvaluateConsensusHandler;

/// Command to cast a vote for a candidate.
#[derive(Debug, Clone)]
pub struct CastVoteCommand {
    pub room_id: RoomId,
    pub candidate_id: CandidateId,
}

/// Result of a counted vote.
#[derive(Debug, Clone)]
pub struct CastVoteResult {
    /// Authoritative post-increment tally for the voted candidate.
    pub vote_count: u64,

    /// True when the room is Matched after this vote.
    pub matched: bool,

    /// Room state observed by this request: the post-transition row
    /// when a match was attempted, the pre-vote row otherwise.
    pub room: Room,
}

/// Handler for casting votes.
pub struct CastVoteHandler {
    rooms: Arc<dyn RoomRepository>,
    tallies: Arc<dyn VoteTallyRepository>,
    membership_check: CheckMembershipHandler,
    consensus: EvaluateConsensusHandler,
    event_publisher: Arc<dyn EventPublisher>,
}

impl CastVoteHandler {
    pub fn new(
        rooms: Arc<dyn RoomRepository>,
        memberships: Arc<dyn MembershipRepository>,
        tallies: Arc<dyn VoteTallyRepository>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            rooms: Arc::clone(&rooms),
            tallies,
            membership_check: CheckMembershipHandler::new(Arc::clone(&memberships)),
            consensus: EvaluateConsensusHandler::new(
                rooms,
                memberships,
                Arc::clone(&event_publisher),
            ),
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: CastVoteCommand,
        metadata: CommandMetadata,
    ) -> Result<CastVoteResult, VoteError> {
        let user_id = metadata.user_id.clone();

        // 1. Membership guard (fails closed on store errors)
        if !self
            .membership_check
            .is_active_member(&cmd.room_id, &user_id)
            .await
        {
            return Err(VoteError::Unauthorized);
        }

        // 2. The room must exist and accept votes
        let room = self
            .rooms
            .find_by_id(&cmd.room_id)
            .await?
            .ok_or(VoteError::RoomNotFound(cmd.room_id))?;

        if !room.accepts_votes() {
            return Err(VoteError::VotingClosed(room.status()));
        }

        // 3. Count the vote atomically
        let vote_count = self
            .tallies
            .increment(&cmd.room_id, &cmd.candidate_id)
            .await?;

        debug!(
            room_id = %cmd.room_id,
            candidate_id = %cmd.candidate_id,
            vote_count,
            "vote counted"
        );

        let event = VoteRecorded {
            event_id: EventId::new(),
            room_id: cmd.room_id,
            user_id,
            candidate_id: cmd.candidate_id.clone(),
            vote_count,
            recorded_at: Timestamp::now(),
        };

        let envelope = event
            .to_envelope()
            .with_correlation_id(metadata.correlation_id())
            .with_user_id(metadata.user_id.to_string());

        // The vote is already counted; delivery is fire-and-forget
        if let Err(e) = self.event_publisher.publish(envelope).await {
            warn!(room_id = %cmd.room_id, error = %e, "failed to publish vote.recorded.v1");
        }

        // 4. Evaluate consensus with the authoritative count
        let outcome = self
            .consensus
            .handle(cmd.room_id, cmd.candidate_id, vote_count, &metadata)
            .await?;

        Ok(CastVoteResult {
            vote_count,
            matched: outcome.matched,
            room: outcome.room.unwrap_or(room),
        })
    }
}
