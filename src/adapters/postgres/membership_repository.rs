//! PostgreSQL implementation of MembershipRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ErrorCode, RoomId, Timestamp, UserId};
use crate::domain::membership::{MemberRole, Membership};
use crate::ports::MembershipRepository;

/// PostgreSQL implementation of MembershipRepository.
#[derive(Clone)]
pub struct PostgresMembershipRepository {
    pool: PgPool,
}

impl PostgresMembershipRepository {
    /// Creates a new PostgresMembershipRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn membership_from_row(row: &PgRow) -> Result<Membership, DomainError> {
        let role_str: String = row.try_get("role").map_err(store_err)?;
        let role = MemberRole::parse(&role_str).ok_or_else(|| {
            DomainError::new(
                ErrorCode::InternalError,
                format!("Unknown member role in store: {}", role_str),
            )
        })?;

        let user_id: String = row.try_get("user_id").map_err(store_err)?;

        Ok(Membership::reconstitute(
            RoomId::from_uuid(row.try_get("room_id").map_err(store_err)?),
            UserId::new(user_id)?,
            role,
            row.try_get("is_active").map_err(store_err)?,
            Timestamp::from_datetime(row.try_get("joined_at").map_err(store_err)?),
        ))
    }
}

fn store_err(e: sqlx::Error) -> DomainError {
    DomainError::store_unavailable(format!("Membership store error: {}", e))
}

#[async_trait]
impl MembershipRepository for PostgresMembershipRepository {
    async fn find(
        &self,
        room_id: &RoomId,
        user_id: &UserId,
    ) -> Result<Option<Membership>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT room_id, user_id, role, is_active, joined_at
            FROM memberships
            WHERE room_id = $1 AND user_id = $2
            "#,
        )
        .bind(room_id.as_uuid())
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(store_err)?;

        row.map(|r| Self::membership_from_row(&r)).transpose()
    }

    async fn save(&self, membership: &Membership) -> Result<(), DomainError> {
        // Upsert on the composite key; the first join's timestamp is
        // kept on rejoin.
        sqlx::query(
            r#"
            INSERT INTO memberships (room_id, user_id, role, is_active, joined_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (room_id, user_id) DO UPDATE
            SET role = EXCLUDED.role, is_active = EXCLUDED.is_active
            "#,
        )
        .bind(membership.room_id().as_uuid())
        .bind(membership.user_id().as_str())
        .bind(membership.role().as_str())
        .bind(membership.is_active())
        .bind(membership.joined_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(store_err)?;

        Ok(())
    }

    async fn count_active(&self, room_id: &RoomId) -> Result<u64, DomainError> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM memberships WHERE room_id = $1 AND is_active",
        )
        .bind(room_id.as_uuid())
        .fetch_one(&self.pool)
        .await
        .map_err(store_err)?;

        Ok(count as u64)
    }

    async fn list_active(&self, room_id: &RoomId) -> Result<Vec<Membership>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT room_id, user_id, role, is_active, joined_at
            FROM memberships
            WHERE room_id = $1 AND is_active
            ORDER BY joined_at
            "#,
        )
        .bind(room_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(store_err)?;

        rows.iter().map(Self::membership_from_row).collect()
    }
}
