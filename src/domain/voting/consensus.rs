//! The pure consensus rule.
//!
//! Consensus is reached when the vote count for a candidate covers every
//! active member of the room. The denominator is read live at evaluation
//! time, so a member leaving mid-vote lowers the threshold.

/// Returns true when `vote_count` votes satisfy a room with
/// `active_member_count` active members.
///
/// An empty room never matches: with no active members there is nobody
/// whose consensus the votes could represent.
pub fn consensus_reached(vote_count: u64, active_member_count: u64) -> bool {
    active_member_count > 0 && vote_count >= active_member_count
}
