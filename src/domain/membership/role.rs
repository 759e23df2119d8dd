//! Member roles within a room.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of a member within a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MemberRole {
    /// The user who created the room.
    Host,
    /// Any other participant.
    #[default]
    Member,
}

impl MemberRole {
    /// Returns the database representation of this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberRole::Host => "host",
            MemberRole::Member => "member",
        }
    }

    /// Parses the database representation of a role.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "host" => Some(MemberRole::Host),
            "member" => Some(MemberRole::Member),
            _ => None,
        }
    }
}

impl fmt::Display for MemberRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_member() {
        assert_eq!(MemberRole::default(), MemberRole::Member);
    }

    #[test]
    fn as_str_and_parse_round_trip() {
        for role in [MemberRole::Host, MemberRole::Member] {
            assert_eq!(MemberRole::parse(role.as_str()), Some(role));
        }
        assert_eq!(MemberRole::parse("admin"), None);
    }

    #[test]
    fn serializes_to_snake_case() {
        assert_eq!(serde_json::to_string(&MemberRole::Host).unwrap(), "\"host\"");
    }
}
