//! PostgreSQL adapters.
//!
//! All authoritative-state mutations go through the database's atomic
//! conditional-write primitives: the vote increment is a single
//! `INSERT .. ON CONFLICT DO UPDATE .. RETURNING` statement and the
//! match transition is a status-guarded `UPDATE`. No adapter ever
//! read-modifies-writes a tally or a room status.

mod catalog_cache;
mod membership_repository;
mod room_repository;
mod vote_tally_repository;

pub use catalog_cache::PostgresCatalogCache;
pub use membership_repository::PostgresMembershipRepository;
pub use room_repository::PostgresRoomRepository;
pub use vote_tally_repository::PostgresVoteTallyRepository;
