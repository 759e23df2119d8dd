//! RoomStatus enum for tracking the lifecycle of voting rooms.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a voting room.
///
/// Matched is terminal: once consensus is reached no vote may move the
/// room to any other status. Closed covers externally-driven cleanup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RoomStatus {
    #[default]
    Open,
    Active,
    Matched,
    Closed,
}

impl RoomStatus {
    /// Returns true if votes may be cast while the room has this status.
    pub fn accepts_votes(&self) -> bool {
        matches!(self, RoomStatus::Open | RoomStatus::Active)
    }

    /// Returns true if this status is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, RoomStatus::Matched | RoomStatus::Closed)
    }

    /// Validates a transition from this status to another.
    ///
    /// Valid transitions:
    /// - Open -> Active, Matched, Closed
    /// - Active -> Matched, Closed
    pub fn can_transition_to(&self, target: &RoomStatus) -> bool {
        use RoomStatus::*;
        matches!(
            (self, target),
            (Open, Active) | (Open, Matched) | (Open, Closed) | (Active, Matched) | (Active, Closed)
        )
    }

    /// Returns the database representation of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomStatus::Open => "open",
            RoomStatus::Active => "active",
            RoomStatus::Matched => "matched",
            RoomStatus::Closed => "closed",
        }
    }

    /// Parses the database representation of a status.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "open" => Some(RoomStatus::Open),
            "active" => Some(RoomStatus::Active),
            "matched" => Some(RoomStatus::Matched),
            "closed" => Some(RoomStatus::Closed),
            _ => None,
        }
    }
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
