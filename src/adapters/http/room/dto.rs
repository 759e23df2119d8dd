//! HTTP DTOs for room endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::application::handlers::room::RoomView;
use crate::domain::room::Room;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to cast a vote.
#[derive(Debug, Clone, Deserialize)]
pub struct CastVoteRequest {
    pub candidate_id: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Room state for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct RoomResponse {
    pub id: String,
    pub host_id: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_candidate_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_member_count: Option<u64>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Room> for RoomResponse {
    fn from(room: &Room) -> Self {
        Self {
            id: room.id().to_string(),
            host_id: room.host_id().to_string(),
            status: room.status().as_str().to_string(),
            result_candidate_id: room.result_candidate_id().map(|c| c.to_string()),
            active_member_count: None,
            created_at: room.created_at().as_datetime().to_rfc3339(),
            updated_at: room.updated_at().as_datetime().to_rfc3339(),
        }
    }
}

impl From<RoomView> for RoomResponse {
    fn from(view: RoomView) -> Self {
        let mut response = RoomResponse::from(&view.room);
        response.active_member_count = Some(view.active_member_count);
        response
    }
}

/// Response for the join endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct JoinRoomResponse {
    pub room_id: String,
    pub rejoined: bool,
}

/// Response for a counted vote.
#[derive(Debug, Clone, Serialize)]
pub struct CastVoteResponse {
    pub vote_count: u64,
    pub matched: bool,
    pub room: RoomResponse,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
        }
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("{} not found: {}", resource_type, id),
        }
    }

    pub fn not_found_message(message: impl Into<String>) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self {
            code: "UNAUTHORIZED".to_string(),
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            code: "CONFLICT".to_string(),
            message: message.into(),
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            code: "UNAVAILABLE".to_string(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL".to_string(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{RoomId, UserId};

    #[test]
    fn room_response_carries_status_string() {
        let room = Room::new(RoomId::new(), UserId::new("host-1").unwrap());
        let response = RoomResponse::from(&room);
        assert_eq!(response.status, "open");
        assert!(response.result_candidate_id.is_none());
    }

    #[test]
    fn error_response_serializes_flat() {
        let error = ErrorResponse::not_found("Room", "abc-123");
        let json = serde_json::to_value(&error).unwrap();
        assert_eq!(json["code"], "NOT_FOUND");
        assert!(json["message"].as_str().unwrap().contains("abc-123"));
    }
}
