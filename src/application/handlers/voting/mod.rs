//! Voting handlers.

mod cast_vote;
mod evaluate_consensus;

pub use cast_vote::{CastVoteCommand, CastVoteHandler, CastVoteResult};
pub use evaluate_consensus::{ConsensusOutcome, EvaluateConsensusHandler};
