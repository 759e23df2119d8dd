//! HTTP handlers for room, membership, and voting endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::middleware::RequireUser;
use crate::application::handlers::membership::{
    JoinRoomCommand, JoinRoomHandler, LeaveRoomCommand, LeaveRoomHandler,
};
use crate::application::handlers::room::{
    CreateRoomCommand, CreateRoomHandler, GetRoomHandler,
};
use crate::application::handlers::voting::{CastVoteCommand, CastVoteHandler};
use crate::domain::foundation::{CandidateId, CommandMetadata, RoomId};
use crate::domain::room::RoomError;
use crate::domain::voting::VoteError;

use super::dto::{
    CastVoteRequest, CastVoteResponse, ErrorResponse, JoinRoomResponse, RoomResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct RoomHandlers {
    create_handler: Arc<CreateRoomHandler>,
    get_handler: Arc<GetRoomHandler>,
    join_handler: Arc<JoinRoomHandler>,
    leave_handler: Arc<LeaveRoomHandler>,
    vote_handler: Arc<CastVoteHandler>,
}

impl RoomHandlers {
    pub fn new(
        create_handler: Arc<CreateRoomHandler>,
        get_handler: Arc<GetRoomHandler>,
        join_handler: Arc<JoinRoomHandler>,
        leave_handler: Arc<LeaveRoomHandler>,
        vote_handler: Arc<CastVoteHandler>,
    ) -> Self {
        Self {
            create_handler,
            get_handler,
            join_handler,
            leave_handler,
            vote_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/rooms - Create a new room
pub async fn create_room(
    State(handlers): State<RoomHandlers>,
    RequireUser(user_id): RequireUser,
) -> Response {
    let cmd = CreateRoomCommand {
        host_id: user_id.clone(),
    };
    let metadata = CommandMetadata::new(user_id);

    match handlers.create_handler.handle(cmd, metadata).await {
        Ok(result) => {
            let response = RoomResponse::from(&result.room);
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_room_error(e),
    }
}

/// GET /api/rooms/:id - Get room state
pub async fn get_room(
    State(handlers): State<RoomHandlers>,
    RequireUser(_user_id): RequireUser,
    Path(room_id): Path<String>,
) -> Response {
    let room_id = match parse_room_id(&room_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.get_handler.handle(room_id).await {
        Ok(view) => {
            let response: RoomResponse = view.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_room_error(e),
    }
}

/// POST /api/rooms/:id/join - Join (or rejoin) a room
pub async fn join_room(
    State(handlers): State<RoomHandlers>,
    RequireUser(user_id): RequireUser,
    Path(room_id): Path<String>,
) -> Response {
    let room_id = match parse_room_id(&room_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = JoinRoomCommand { room_id };
    let metadata = CommandMetadata::new(user_id);

    match handlers.join_handler.handle(cmd, metadata).await {
        Ok(result) => {
            let response = JoinRoomResponse {
                room_id: room_id.to_string(),
                rejoined: result.rejoined,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_room_error(e),
    }
}

/// POST /api/rooms/:id/leave - Leave a room
pub async fn leave_room(
    State(handlers): State<RoomHandlers>,
    RequireUser(user_id): RequireUser,
    Path(room_id): Path<String>,
) -> Response {
    let room_id = match parse_room_id(&room_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = LeaveRoomCommand { room_id };
    let metadata = CommandMetadata::new(user_id);

    match handlers.leave_handler.handle(cmd, metadata).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_room_error(e),
    }
}

/// POST /api/rooms/:id/votes - Cast a vote for a candidate
pub async fn cast_vote(
    State(handlers): State<RoomHandlers>,
    RequireUser(user_id): RequireUser,
    Path(room_id): Path<String>,
    Json(req): Json<CastVoteRequest>,
) -> Response {
    let room_id = match parse_room_id(&room_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let candidate_id = match CandidateId::new(req.candidate_id) {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request("Invalid candidate ID")),
            )
                .into_response()
        }
    };

    let cmd = CastVoteCommand {
        room_id,
        candidate_id,
    };
    let metadata = CommandMetadata::new(user_id);

    match handlers.vote_handler.handle(cmd, metadata).await {
        Ok(result) => {
            let response = CastVoteResponse {
                vote_count: result.vote_count,
                matched: result.matched,
                room: RoomResponse::from(&result.room),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_vote_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn parse_room_id(raw: &str) -> Result<RoomId, Response> {
    raw.parse::<RoomId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid room ID")),
        )
            .into_response()
    })
}

fn handle_room_error(error: RoomError) -> Response {
    match error {
        RoomError::NotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Room", &id.to_string())),
        )
            .into_response(),
        RoomError::MembershipNotFound => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found_message(
                "Membership not found in this room",
            )),
        )
            .into_response(),
        RoomError::NotAMember => (
            StatusCode::FORBIDDEN,
            Json(ErrorResponse::unauthorized(
                "User is not an active member of this room",
            )),
        )
            .into_response(),
        RoomError::InvalidState(msg) => (
            StatusCode::CONFLICT,
            Json(ErrorResponse::conflict(msg)),
        )
            .into_response(),
        RoomError::ValidationFailed { field, message } => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(format!(
                "Validation failed for {}: {}",
                field, message
            ))),
        )
            .into_response(),
        RoomError::Infrastructure(msg) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorResponse::unavailable(msg)),
        )
            .into_response(),
    }
}

fn handle_vote_error(error: VoteError) -> Response {
    match error {
        VoteError::RoomNotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Room", &id.to_string())),
        )
            .into_response(),
        VoteError::Unauthorized => (
            StatusCode::FORBIDDEN,
            Json(ErrorResponse::unauthorized(
                "User is not an active member of this room",
            )),
        )
            .into_response(),
        VoteError::VotingClosed(status) => (
            StatusCode::CONFLICT,
            Json(ErrorResponse::conflict(format!(
                "Room does not accept votes in status '{}'",
                status
            ))),
        )
            .into_response(),
        VoteError::ValidationFailed { field, message } => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(format!(
                "Validation failed for {}: {}",
                field, message
            ))),
        )
            .into_response(),
        VoteError::Store(msg) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorResponse::unavailable(msg)),
        )
            .into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_not_found_maps_to_404() {
        let response = handle_room_error(RoomError::MembershipNotFound);
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn not_a_member_maps_to_403() {
        let response = handle_room_error(RoomError::NotAMember);
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn vote_store_failures_map_to_503() {
        let response = handle_vote_error(VoteError::Store("down".to_string()));
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
