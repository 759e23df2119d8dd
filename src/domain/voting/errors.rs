//! Voting-specific error types.
//!
//! Maps the caller-facing taxonomy: not-found and unauthorized are
//! fatal and surfaced verbatim; store failures are marked retryable but
//! never retried internally for authoritative writes.

use crate::domain::foundation::{DomainError, ErrorCode, RoomId, RoomStatus};

/// Errors raised while casting a vote or evaluating consensus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoteError {
    /// Room was not found.
    RoomNotFound(RoomId),
    /// Caller is not an active member (or the membership lookup failed -
    /// lookups fail closed).
    Unauthorized,
    /// The room no longer accepts votes.
    VotingClosed(RoomStatus),
    /// Validation failed on an input.
    ValidationFailed { field: String, message: String },
    /// Transient store failure; the caller may retry.
    Store(String),
}

impl VoteError {
    pub fn room_not_found(id: RoomId) -> Self {
        VoteError::RoomNotFound(id)
    }

    pub fn unauthorized() -> Self {
        VoteError::Unauthorized
    }

    pub fn voting_closed(status: RoomStatus) -> Self {
        VoteError::VotingClosed(status)
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        VoteError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn store(message: impl Into<String>) -> Self {
        VoteError::Store(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            VoteError::RoomNotFound(_) => ErrorCode::RoomNotFound,
            VoteError::Unauthorized => ErrorCode::Unauthorized,
            VoteError::VotingClosed(_) => ErrorCode::VotingClosed,
            VoteError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            VoteError::Store(_) => ErrorCode::StoreUnavailable,
        }
    }

    pub fn message(&self) -> String {
        match self {
            VoteError::RoomNotFound(id) => format!("Room not found: {}", id),
            VoteError::Unauthorized => "User is not an active member of this room".to_string(),
            VoteError::VotingClosed(status) => {
                format!("Room does not accept votes in status '{}'", status)
            }
            VoteError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            VoteError::Store(msg) => format!("Store error: {}", msg),
        }
    }
}

impl std::fmt::Display for VoteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for VoteError {}

impl From<DomainError> for VoteError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::Unauthorized | ErrorCode::Forbidden => VoteError::Unauthorized,
            ErrorCode::StoreUnavailable => VoteError::Store(err.message),
            ErrorCode::ValidationFailed | ErrorCode::EmptyField | ErrorCode::InvalidFormat => {
                VoteError::ValidationFailed {
                    field: err
                        .details
                        .get("field")
                        .cloned()
                        .unwrap_or_else(|| "unknown".to_string()),
                    message: err.message,
                }
            }
            _ => VoteError::Store(err.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn voting_closed_names_the_status() {
        let err = VoteError::voting_closed(RoomStatus::Matched);
        assert!(err.message().contains("matched"));
        assert_eq!(err.code(), ErrorCode::VotingClosed);
    }

    #[test]
    fn store_errors_are_retryable() {
        assert!(VoteError::store("timeout").code().is_retryable());
        assert!(!VoteError::unauthorized().code().is_retryable());
    }

    #[test]
    fn domain_error_conversion_maps_unauthorized() {
        let err: VoteError = DomainError::new(ErrorCode::Forbidden, "denied").into();
        assert_eq!(err, VoteError::Unauthorized);
    }
}
