//! Room aggregate entity.
//!
//! A room is the shared context a group votes in. Membership rows are
//! referenced by room ID but owned by the membership module; vote
//! tallies are owned by the vote aggregator.
//!
//! # Invariants
//!
//! - `result_candidate_id` is set if and only if `status == Matched`
//! - `Matched` is terminal: no mutation is accepted afterwards

use crate::domain::foundation::{
    CandidateId, DomainError, ErrorCode, RoomId, RoomStatus, Timestamp, UserId,
};
use serde::{Deserialize, Serialize};

/// Room aggregate - a bounded group voting context with a lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Unique identifier for this room.
    id: RoomId,

    /// User who created the room.
    host_id: UserId,

    /// Current lifecycle status.
    status: RoomStatus,

    /// The winning candidate, present exactly when status is Matched.
    result_candidate_id: Option<CandidateId>,

    /// When the room was created.
    created_at: Timestamp,

    /// When the room was last updated.
    updated_at: Timestamp,
}

impl Room {
    /// Create a new open room hosted by the given user.
    pub fn new(id: RoomId, host_id: UserId) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            host_id,
            status: RoomStatus::Open,
            result_candidate_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Reconstitute a room from persistence (no validation, no events).
    pub fn reconstitute(
        id: RoomId,
        host_id: UserId,
        status: RoomStatus,
        result_candidate_id: Option<CandidateId>,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            host_id,
            status,
            result_candidate_id,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the room ID.
    pub fn id(&self) -> &RoomId {
        &self.id
    }

    /// Returns the host's user ID.
    pub fn host_id(&self) -> &UserId {
        &self.host_id
    }

    /// Returns the current status.
    pub fn status(&self) -> RoomStatus {
        self.status
    }

    /// Returns the winning candidate, if the room has matched.
    pub fn result_candidate_id(&self) -> Option<&CandidateId> {
        self.result_candidate_id.as_ref()
    }

    /// Returns when the room was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns when the room was last updated.
    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Checks if the given user is the room host.
    pub fn is_host(&self, user_id: &UserId) -> bool {
        &self.host_id == user_id
    }

    /// Returns true if the room currently accepts votes.
    pub fn accepts_votes(&self) -> bool {
        self.status.accepts_votes()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Move an open room into active voting.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` if the room is not Open
    pub fn activate(&mut self) -> Result<(), DomainError> {
        if !self.status.can_transition_to(&RoomStatus::Active) {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!("Cannot activate a {} room", self.status),
            ));
        }
        self.status = RoomStatus::Active;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Record consensus on a candidate, transitioning to Matched.
    ///
    /// This is the in-memory half of the match transition; the store
    /// adapter applies the same guard atomically so that concurrent
    /// winners resolve to exactly one.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` if the room is already Matched or Closed
    pub fn complete_match(&mut self, candidate_id: CandidateId) -> Result<(), DomainError> {
        if !self.status.can_transition_to(&RoomStatus::Matched) {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!("Cannot match a {} room", self.status),
            ));
        }
        self.status = RoomStatus::Matched;
        self.result_candidate_id = Some(candidate_id);
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Close the room without a match (lifecycle cleanup).
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` if the room is already terminal
    pub fn close(&mut self) -> Result<(), DomainError> {
        if !self.status.can_transition_to(&RoomStatus::Closed) {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!("Cannot close a {} room", self.status),
            ));
        }
        self.status = RoomStatus::Closed;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Bump `updated_at` after a membership change.
    pub fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host() -> UserId {
        UserId::new("host-1").unwrap()
    }

    fn candidate() -> CandidateId {
        CandidateId::new("tt0133093").unwrap()
    }

    fn test_room() -> Room {
        Room::new(RoomId::new(), host())
    }

    #[test]
    fn new_room_is_open_without_result() {
        let room = test_room();
        assert_eq!(room.status(), RoomStatus::Open);
        assert!(room.result_candidate_id().is_none());
        assert!(room.accepts_votes());
    }

    #[test]
    fn host_is_recognized() {
        let room = test_room();
        assert!(room.is_host(&host()));
        assert!(!room.is_host(&UserId::new("someone-else").unwrap()));
    }

    #[test]
    fn activate_moves_open_to_active() {
        let mut room = test_room();
        room.activate().unwrap();
        assert_eq!(room.status(), RoomStatus::Active);
        assert!(room.accepts_votes());
    }

    #[test]
    fn activate_twice_fails() {
        let mut room = test_room();
        room.activate().unwrap();
        assert!(room.activate().is_err());
    }

    #[test]
    fn complete_match_sets_result_and_status_together() {
        let mut room = test_room();
        room.complete_match(candidate()).unwrap();
        assert_eq!(room.status(), RoomStatus::Matched);
        assert_eq!(room.result_candidate_id(), Some(&candidate()));
    }

    #[test]
    fn matched_room_rejects_further_matches() {
        let mut room = test_room();
        room.complete_match(candidate()).unwrap();

        let second = CandidateId::new("tt0111161").unwrap();
        assert!(room.complete_match(second).is_err());
        // Result is untouched by the failed transition
        assert_eq!(room.result_candidate_id(), Some(&candidate()));
    }

    #[test]
    fn matched_room_rejects_close() {
        let mut room = test_room();
        room.complete_match(candidate()).unwrap();
        assert!(room.close().is_err());
    }

    #[test]
    fn closed_room_rejects_match() {
        let mut room = test_room();
        room.close().unwrap();
        assert!(room.complete_match(candidate()).is_err());
        assert!(room.result_candidate_id().is_none());
    }

    #[test]
    fn touch_bumps_updated_at() {
        let mut room = test_room();
        let before = *room.updated_at();
        std::thread::sleep(std::time::Duration::from_millis(5));
        room.touch();
        assert!(room.updated_at().is_after(&before));
    }

    #[test]
    fn reconstitute_preserves_fields() {
        let id = RoomId::new();
        let created = Timestamp::now();
        let room = Room::reconstitute(
            id,
            host(),
            RoomStatus::Matched,
            Some(candidate()),
            created,
            created,
        );
        assert_eq!(room.id(), &id);
        assert_eq!(room.status(), RoomStatus::Matched);
        assert_eq!(room.result_candidate_id(), Some(&candidate()));
    }
}
