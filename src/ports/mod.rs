//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Store Ports
//!
//! - `RoomRepository` - Room rows plus the conditional match transition
//! - `MembershipRepository` - Membership rows and the active-member count
//! - `VoteTallyRepository` - Atomic add-or-create vote increments
//! - `CatalogCache` - Candidate-set cache entries (derived, evictable)
//!
//! ## External Collaborator Ports
//!
//! - `MetadataSource` - Time-bounded external catalog fetches
//! - `EventPublisher` - Fan-out of domain events (delivery is external)

mod catalog_cache;
mod event_publisher;
mod membership_repository;
mod metadata_source;
mod room_repository;
mod vote_tally_repository;

pub use catalog_cache::CatalogCache;
pub use event_publisher::EventPublisher;
pub use membership_repository::MembershipRepository;
pub use metadata_source::{MetadataSource, MetadataSourceError};
pub use room_repository::{MatchTransition, RoomRepository};
pub use vote_tally_repository::VoteTallyRepository;
