//! Redis-backed event publisher for production deployments.
//!
//! Publishes serialized event envelopes to per-room Redis pub/sub
//! channels so that every server instance holding a websocket or
//! polling client for a room sees its events.

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;

use crate::domain::foundation::{DomainError, ErrorCode, EventEnvelope};
use crate::ports::EventPublisher;

/// Redis pub/sub event publisher.
///
/// Channel naming: `room:{aggregate_id}` for Room events, plus a
/// firehose channel `events:all` carrying everything, for consumers
/// that want the full stream.
#[derive(Clone)]
pub struct RedisEventPublisher {
    conn: MultiplexedConnection,
}

impl RedisEventPublisher {
    /// Create a new Redis event publisher.
    pub fn new(conn: MultiplexedConnection) -> Self {
        Self { conn }
    }

    fn channel_for(envelope: &EventEnvelope) -> String {
        format!(
            "{}:{}",
            envelope.aggregate_type.to_lowercase(),
            envelope.aggregate_id
        )
    }
}

#[async_trait]
impl EventPublisher for RedisEventPublisher {
    async fn publish(&self, envelope: EventEnvelope) -> Result<(), DomainError> {
        let payload = serde_json::to_string(&envelope).map_err(|e| {
            DomainError::new(
                ErrorCode::InternalError,
                format!("Failed to serialize event envelope: {}", e),
            )
        })?;

        let mut conn = self.conn.clone();

        conn.publish::<_, _, ()>(Self::channel_for(&envelope), &payload)
            .await
            .map_err(|e: redis::RedisError| {
                DomainError::store_unavailable(format!("Event publish failed: {}", e))
            })?;

        conn.publish::<_, _, ()>("events:all", &payload)
            .await
            .map_err(|e: redis::RedisError| {
                DomainError::store_unavailable(format!("Event publish failed: {}", e))
            })?;

        Ok(())
    }

    async fn publish_all(&self, envelopes: Vec<EventEnvelope>) -> Result<(), DomainError> {
        for envelope in envelopes {
            self.publish(envelope).await?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for RedisEventPublisher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisEventPublisher").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    // Redis integration tests require a running Redis instance and are
    // run separately from unit tests.
    //
    // #[tokio::test]
    // #[ignore] // Run with: cargo test -- --ignored
    // async fn publishes_to_room_channel() {
    //     let client = redis::Client::open("redis://127.0.0.1/").unwrap();
    //     let conn = client.get_multiplexed_tokio_connection().await.unwrap();
    //     let publisher = RedisEventPublisher::new(conn);
    //     // ... test code
    // }
}
