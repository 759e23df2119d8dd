//! Voting domain module - tallies and the pure consensus rule.

mod consensus;
mod errors;
mod tally;

pub use consensus::consensus_reached;
pub use errors::VoteError;
pub use tally::VoteTally;
