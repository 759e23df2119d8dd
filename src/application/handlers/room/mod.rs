//! Room handlers.

mod create_room;
mod get_room;

pub use create_room::{CreateRoomCommand, CreateRoomHandler, CreateRoomResult};
pub use get_room::{GetRoomHandler, RoomView};
