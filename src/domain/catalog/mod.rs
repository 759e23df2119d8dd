//! Catalog domain module - candidate metadata and its cache.

mod cache_entry;
mod candidate;
mod defaults;

pub use cache_entry::CacheEntry;
pub use candidate::{CandidateMetadata, FilterKey};
pub use defaults::default_candidates;
