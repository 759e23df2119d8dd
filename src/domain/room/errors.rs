//! Room-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, RoomId};

/// Room-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomError {
    /// Room was not found.
    NotFound(RoomId),
    /// No membership row exists for the caller in this room.
    MembershipNotFound,
    /// Caller is not a member of the room.
    NotAMember,
    /// Invalid lifecycle transition.
    InvalidState(String),
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error (retryable).
    Infrastructure(String),
}

impl RoomError {
    pub fn not_found(id: RoomId) -> Self {
        RoomError::NotFound(id)
    }

    pub fn membership_not_found() -> Self {
        RoomError::MembershipNotFound
    }

    pub fn not_a_member() -> Self {
        RoomError::NotAMember
    }

    pub fn invalid_state(message: impl Into<String>) -> Self {
        RoomError::InvalidState(message.into())
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        RoomError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        RoomError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            RoomError::NotFound(_) => ErrorCode::RoomNotFound,
            RoomError::MembershipNotFound => ErrorCode::MembershipNotFound,
            RoomError::NotAMember => ErrorCode::Unauthorized,
            RoomError::InvalidState(_) => ErrorCode::InvalidStateTransition,
            RoomError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            RoomError::Infrastructure(_) => ErrorCode::StoreUnavailable,
        }
    }

    pub fn message(&self) -> String {
        match self {
            RoomError::NotFound(id) => format!("Room not found: {}", id),
            RoomError::MembershipNotFound => {
                "User has no membership in this room".to_string()
            }
            RoomError::NotAMember => "User is not an active member of this room".to_string(),
            RoomError::InvalidState(msg) => format!("Invalid state: {}", msg),
            RoomError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            RoomError::Infrastructure(msg) => format!("Store error: {}", msg),
        }
    }
}

impl std::fmt::Display for RoomError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for RoomError {}

impl From<DomainError> for RoomError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::MembershipNotFound => RoomError::MembershipNotFound,
            ErrorCode::Unauthorized | ErrorCode::Forbidden => RoomError::NotAMember,
            ErrorCode::InvalidStateTransition | ErrorCode::VotingClosed => {
                RoomError::InvalidState(err.message)
            }
            ErrorCode::StoreUnavailable => RoomError::Infrastructure(err.message),
            ErrorCode::ValidationFailed | ErrorCode::EmptyField | ErrorCode::InvalidFormat => {
                RoomError::ValidationFailed {
                    field: err
                        .details
                        .get("field")
                        .cloned()
                        .unwrap_or_else(|| "unknown".to_string()),
                    message: err.message,
                }
            }
            _ => RoomError::Infrastructure(err.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_carries_room_id() {
        let id = RoomId::new();
        let err = RoomError::not_found(id);
        assert!(err.message().contains(&id.to_string()));
        assert_eq!(err.code(), ErrorCode::RoomNotFound);
    }

    #[test]
    fn membership_not_found_is_fatal_not_found() {
        let err = RoomError::membership_not_found();
        assert_eq!(err.code(), ErrorCode::MembershipNotFound);
        assert!(!err.code().is_retryable());
    }

    #[test]
    fn infrastructure_maps_to_retryable_code() {
        let err = RoomError::infrastructure("connection refused");
        assert!(err.code().is_retryable());
    }

    #[test]
    fn domain_error_conversion_preserves_category() {
        let err: RoomError = DomainError::store_unavailable("timeout").into();
        assert!(matches!(err, RoomError::Infrastructure(_)));

        let err: RoomError = DomainError::new(ErrorCode::Unauthorized, "nope").into();
        assert_eq!(err, RoomError::NotAMember);
    }
}
