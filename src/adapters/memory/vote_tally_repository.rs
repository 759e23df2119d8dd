//! In-memory implementation of VoteTallyRepository.
//!
//! The increment runs entirely under one lock acquisition, matching the
//! linearizability of the store's atomic add-or-create primitive: no
//! two increments are lost or double-applied.
//!
//! # Panics
//!
//! Methods panic if the internal lock is poisoned. Acceptable for test
//! code; production uses the PostgreSQL adapter.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::foundation::{CandidateId, DomainError, RoomId, Timestamp};
use crate::domain::voting::VoteTally;
use crate::ports::VoteTallyRepository;

/// In-memory vote tally store keyed by (room, candidate).
#[derive(Default)]
pub struct InMemoryVoteTallyRepository {
    tallies: Mutex<HashMap<(RoomId, CandidateId), VoteTally>>,
}

impl InMemoryVoteTallyRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VoteTallyRepository for InMemoryVoteTallyRepository {
    async fn increment(
        &self,
        room_id: &RoomId,
        candidate_id: &CandidateId,
    ) -> Result<u64, DomainError> {
        let mut tallies = self
            .tallies
            .lock()
            .expect("InMemoryVoteTallyRepository: lock poisoned");

        let tally = tallies
            .entry((*room_id, candidate_id.clone()))
            .or_insert_with(|| VoteTally::new(*room_id, candidate_id.clone(), 0));

        tally.votes += 1;
        tally.updated_at = Timestamp::now();
        Ok(tally.votes)
    }

    async fn get(
        &self,
        room_id: &RoomId,
        candidate_id: &CandidateId,
    ) -> Result<Option<VoteTally>, DomainError> {
        Ok(self
            .tallies
            .lock()
            .expect("InMemoryVoteTallyRepository: lock poisoned")
            .get(&(*room_id, candidate_id.clone()))
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn candidate(id: &str) -> CandidateId {
        CandidateId::new(id).unwrap()
    }

    #[tokio::test]
    async fn first_increment_creates_row_with_one() {
        let repo = InMemoryVoteTallyRepository::new();
        let room_id = RoomId::new();

        let count = repo.increment(&room_id, &candidate("c-1")).await.unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn increments_return_post_increment_counts() {
        let repo = InMemoryVoteTallyRepository::new();
        let room_id = RoomId::new();

        for expected in 1..=5u64 {
            let count = repo.increment(&room_id, &candidate("c-1")).await.unwrap();
            assert_eq!(count, expected);
        }
    }

    #[tokio::test]
    async fn candidates_are_counted_independently() {
        let repo = InMemoryVoteTallyRepository::new();
        let room_id = RoomId::new();

        repo.increment(&room_id, &candidate("c-1")).await.unwrap();
        repo.increment(&room_id, &candidate("c-2")).await.unwrap();
        repo.increment(&room_id, &candidate("c-2")).await.unwrap();

        let c1 = repo.get(&room_id, &candidate("c-1")).await.unwrap().unwrap();
        let c2 = repo.get(&room_id, &candidate("c-2")).await.unwrap().unwrap();
        assert_eq!(c1.votes, 1);
        assert_eq!(c2.votes, 2);
    }

    #[tokio::test]
    async fn get_missing_tally_returns_none() {
        let repo = InMemoryVoteTallyRepository::new();
        let found = repo.get(&RoomId::new(), &candidate("c-1")).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_increments_are_never_lost() {
        let repo = Arc::new(InMemoryVoteTallyRepository::new());
        let room_id = RoomId::new();

        let mut handles = Vec::new();
        for _ in 0..50 {
            let repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                repo.increment(&room_id, &candidate("c-1")).await.unwrap()
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let tally = repo.get(&room_id, &candidate("c-1")).await.unwrap().unwrap();
        assert_eq!(tally.votes, 50);
    }
}
