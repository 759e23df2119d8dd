//! Membership domain module - who belongs to which room.

mod aggregate;
mod role;

pub use aggregate::Membership;
pub use role::MemberRole;
