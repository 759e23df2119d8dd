//! In-memory event bus for tests.
//!
//! Captures every published envelope so tests can assert on exactly
//! which events a handler emitted.
//!
//! # Panics
//!
//! Methods panic if the internal lock is poisoned. Acceptable for test
//! code; production uses the Redis publisher.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use crate::domain::foundation::{DomainError, EventEnvelope};
use crate::ports::EventPublisher;

/// Capturing event bus.
#[derive(Default)]
pub struct InMemoryEventBus {
    published: Mutex<Vec<EventEnvelope>>,
    failing: AtomicBool,
}

impl InMemoryEventBus {
    /// Creates an empty bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a bus whose publishes fail until `recover` is called.
    pub fn failing() -> Self {
        let bus = Self::default();
        bus.failing.store(true, Ordering::SeqCst);
        bus
    }

    /// Makes subsequent publishes succeed again.
    pub fn recover(&self) {
        self.failing.store(false, Ordering::SeqCst);
    }

    /// All envelopes published so far, in publication order.
    pub fn published_events(&self) -> Vec<EventEnvelope> {
        self.published
            .lock()
            .expect("InMemoryEventBus: lock poisoned")
            .clone()
    }

    /// Envelopes of the given event type, in publication order.
    pub fn events_of_type(&self, event_type: &str) -> Vec<EventEnvelope> {
        self.published
            .lock()
            .expect("InMemoryEventBus: lock poisoned")
            .iter()
            .filter(|e| e.event_type == event_type)
            .cloned()
            .collect()
    }

    /// True if at least one event of the given type was published.
    pub fn has_event(&self, event_type: &str) -> bool {
        !self.events_of_type(event_type).is_empty()
    }

    /// Total number of published envelopes.
    pub fn event_count(&self) -> usize {
        self.published
            .lock()
            .expect("InMemoryEventBus: lock poisoned")
            .len()
    }

    /// Discards all captured envelopes.
    pub fn clear(&self) {
        self.published
            .lock()
            .expect("InMemoryEventBus: lock poisoned")
            .clear();
    }
}

#[async_trait]
impl EventPublisher for InMemoryEventBus {
    async fn publish(&self, envelope: EventEnvelope) -> Result<(), DomainError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(DomainError::store_unavailable("event bus unavailable"));
        }
        self.published
            .lock()
            .expect("InMemoryEventBus: lock poisoned")
            .push(envelope);
        Ok(())
    }

    async fn publish_all(&self, envelopes: Vec<EventEnvelope>) -> Result<(), DomainError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(DomainError::store_unavailable("event bus unavailable"));
        }
        self.published
            .lock()
            .expect("InMemoryEventBus: lock poisoned")
            .extend(envelopes);
        Ok(())
    }
}
