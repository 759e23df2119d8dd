//! Command and query handlers grouped by domain module.

pub mod catalog;
pub mod membership;
pub mod room;
pub mod voting;
