//! Command infrastructure for CQRS handlers.
//!
//! Every handler accepts a single `CommandMetadata` rather than loose
//! `correlation_id`/`trace_id` parameters, so tracing context flows
//! through commands and into emitted events with one consistent shape.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::UserId;

/// Metadata context for command handlers.
///
/// Carries tracing, correlation, and identity context through the
/// command pipeline. Propagated to emitted events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandMetadata {
    /// The user executing this command (pre-authenticated upstream).
    pub user_id: UserId,

    /// Links related operations across a single user request.
    /// Generated at the API boundary if not provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    correlation_id: Option<String>,

    /// Distributed tracing span/trace ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    trace_id: Option<String>,
}

impl CommandMetadata {
    /// Creates new command metadata with the required user ID.
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            correlation_id: None,
            trace_id: None,
        }
    }

    /// Builder: Add correlation ID for request tracing.
    pub fn with_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.correlation_id = Some(id.into());
        self
    }

    /// Builder: Add trace ID for distributed tracing.
    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }

    /// Returns the correlation ID, generating one if not set.
    ///
    /// Ensures every command has a correlation ID for tracing even if
    /// the API layer didn't provide one.
    pub fn correlation_id(&self) -> String {
        self.correlation_id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string())
    }

    /// Returns the trace ID if set.
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user() -> UserId {
        UserId::new("user-123").unwrap()
    }

    #[test]
    fn new_metadata_has_no_optional_fields() {
        let meta = CommandMetadata::new(test_user());
        assert!(meta.trace_id().is_none());
    }

    #[test]
    fn correlation_id_is_generated_when_absent() {
        let meta = CommandMetadata::new(test_user());
        assert!(!meta.correlation_id().is_empty());
    }

    #[test]
    fn correlation_id_is_preserved_when_set() {
        let meta = CommandMetadata::new(test_user()).with_correlation_id("req-42");
        assert_eq!(meta.correlation_id(), "req-42");
    }

    #[test]
    fn builder_chain_sets_all_fields() {
        let meta = CommandMetadata::new(test_user())
            .with_correlation_id("req-1")
            .with_trace_id("trace-1");
        assert_eq!(meta.correlation_id(), "req-1");
        assert_eq!(meta.trace_id(), Some("trace-1"));
    }
}
