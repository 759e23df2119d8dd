//! PostgreSQL implementation of VoteTallyRepository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{CandidateId, DomainError, RoomId, Timestamp};
use crate::domain::voting::VoteTally;
use crate::ports::VoteTallyRepository;

/// PostgreSQL implementation of VoteTallyRepository.
#[derive(Clone)]
pub struct PostgresVoteTallyRepository {
    pool: PgPool,
}

impl PostgresVoteTallyRepository {
    /// Creates a new PostgresVoteTallyRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn store_err(e: sqlx::Error) -> DomainError {
    DomainError::store_unavailable(format!("Vote tally store error: {}", e))
}

#[async_trait]
impl VoteTallyRepository for PostgresVoteTallyRepository {
    async fn increment(
        &self,
        room_id: &RoomId,
        candidate_id: &CandidateId,
    ) -> Result<u64, DomainError> {
        // Atomic add-or-create; the returned count is the authoritative
        // post-increment value for this caller.
        let votes: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO vote_tallies (room_id, candidate_id, votes, updated_at)
            VALUES ($1, $2, 1, NOW())
            ON CONFLICT (room_id, candidate_id) DO UPDATE
            SET votes = vote_tallies.votes + 1, updated_at = NOW()
            RETURNING votes
            "#,
        )
        .bind(room_id.as_uuid())
        .bind(candidate_id.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(store_err)?;

        Ok(votes as u64)
    }

    async fn get(
        &self,
        room_id: &RoomId,
        candidate_id: &CandidateId,
    ) -> Result<Option<VoteTally>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT room_id, candidate_id, votes, updated_at
            FROM vote_tallies
            WHERE room_id = $1 AND candidate_id = $2
            "#,
        )
        .bind(room_id.as_uuid())
        .bind(candidate_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(store_err)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let votes: i64 = row.try_get("votes").map_err(store_err)?;
        Ok(Some(VoteTally {
            room_id: *room_id,
            candidate_id: candidate_id.clone(),
            votes: votes as u64,
            updated_at: Timestamp::from_datetime(row.try_get("updated_at").map_err(store_err)?),
        }))
    }
}
