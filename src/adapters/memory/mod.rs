//! In-memory adapters for tests and local development.
//!
//! Each adapter holds one mutex-guarded map per table; every port
//! operation runs under that lock, which stands in for the store's
//! per-row atomicity (atomic increment, compare-and-swap transition).
//! Concurrent callers interleave freely between operations, exactly as
//! they would against the real store.

mod catalog_cache;
mod membership_repository;
mod metadata_source;
mod room_repository;
mod vote_tally_repository;

pub use catalog_cache::InMemoryCatalogCache;
pub use membership_repository::InMemoryMembershipRepository;
pub use metadata_source::StaticMetadataSource;
pub use room_repository::InMemoryRoomRepository;
pub use vote_tally_repository::InMemoryVoteTallyRepository;
