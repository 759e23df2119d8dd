//! Reelmatch - Group Movie Matching Backend
//!
//! This crate implements the consensus voting engine behind group movie
//! matching: members join a room, vote on candidate movies, and the room
//! transitions to Matched the instant every active member has voted for
//! the same candidate. Candidate metadata is resolved through a layered
//! cache that degrades gracefully when the external catalog is down.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
