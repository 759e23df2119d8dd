//! Membership handlers.

mod check_membership;
mod join_room;
mod leave_room;

pub use check_membership::CheckMembershipHandler;
pub use join_room::{JoinRoomCommand, JoinRoomHandler, JoinRoomResult};
pub use leave_room::{LeaveRoomCommand, LeaveRoomHandler};
