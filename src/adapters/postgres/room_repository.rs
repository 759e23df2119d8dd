//! PostgreSQL implementation of RoomRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{
    CandidateId, DomainError, ErrorCode, RoomId, RoomStatus, Timestamp, UserId,
};
use crate::domain::room::Room;
use crate::ports::{MatchTransition, RoomRepository};

/// PostgreSQL implementation of RoomRepository.
#[derive(Clone)]
pub struct PostgresRoomRepository {
    pool: PgPool,
}

impl PostgresRoomRepository {
    /// Creates a new PostgresRoomRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn room_from_row(row: &PgRow) -> Result<Room, DomainError> {
        let status_str: String = row.try_get("status").map_err(store_err)?;
        let status = RoomStatus::parse(&status_str).ok_or_else(|| {
            DomainError::new(
                ErrorCode::InternalError,
                format!("Unknown room status in store: {}", status_str),
            )
        })?;

        let host_id: String = row.try_get("host_id").map_err(store_err)?;
        let result_candidate: Option<String> =
            row.try_get("result_candidate_id").map_err(store_err)?;
        let result_candidate_id = result_candidate
            .map(CandidateId::new)
            .transpose()
            .map_err(DomainError::from)?;

        Ok(Room::reconstitute(
            RoomId::from_uuid(row.try_get("id").map_err(store_err)?),
            UserId::new(host_id)?,
            status,
            result_candidate_id,
            Timestamp::from_datetime(row.try_get("created_at").map_err(store_err)?),
            Timestamp::from_datetime(row.try_get("updated_at").map_err(store_err)?),
        ))
    }
}

fn store_err(e: sqlx::Error) -> DomainError {
    DomainError::store_unavailable(format!("Room store error: {}", e))
}

#[async_trait]
impl RoomRepository for PostgresRoomRepository {
    async fn save(&self, room: &Room) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO rooms (
                id, host_id, status, result_candidate_id, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(room.id().as_uuid())
        .bind(room.host_id().as_str())
        .bind(room.status().as_str())
        .bind(room.result_candidate_id().map(|c| c.as_str()))
        .bind(room.created_at().as_datetime())
        .bind(room.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(store_err)?;

        Ok(())
    }

    async fn find_by_id(&self, id: &RoomId) -> Result<Option<Room>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, host_id, status, result_candidate_id, created_at, updated_at
            FROM rooms
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(store_err)?;

        row.map(|r| Self::room_from_row(&r)).transpose()
    }

    async fn complete_match(
        &self,
        id: &RoomId,
        candidate_id: &CandidateId,
    ) -> Result<MatchTransition, DomainError> {
        // Single conditional write: only a room still accepting votes
        // can move to Matched, so concurrent winners resolve to one.
        let result = sqlx::query(
            r#"
            UPDATE rooms
            SET status = 'matched', result_candidate_id = $2, updated_at = NOW()
            WHERE id = $1 AND status IN ('open', 'active')
            "#,
        )
        .bind(id.as_uuid())
        .bind(candidate_id.as_str())
        .execute(&self.pool)
        .await
        .map_err(store_err)?;

        let applied = result.rows_affected() == 1;

        let room = self.find_by_id(id).await?.ok_or_else(|| {
            DomainError::new(ErrorCode::RoomNotFound, format!("Room not found: {}", id))
        })?;

        Ok(MatchTransition { room, applied })
    }

    async fn touch(&self, id: &RoomId) -> Result<(), DomainError> {
        let result = sqlx::query("UPDATE rooms SET updated_at = NOW() WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(store_err)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::RoomNotFound,
                format!("Room not found: {}", id),
            ));
        }
        Ok(())
    }
}
