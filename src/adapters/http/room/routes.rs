//! HTTP routes for room endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{cast_vote, create_room, get_room, join_room, leave_room, RoomHandlers};

/// Creates the room router with all endpoints.
pub fn room_routes(handlers: RoomHandlers) -> Router {
    Router::new()
        .route("/", post(create_room))
        .route("/:id", get(get_room))
        .route("/:id/join", post(join_room))
        .route("/:id/leave", post(leave_room))
        .route("/:id/votes", post(cast_vote))
        .with_state(handlers)
}
