//! Catalog handlers.

mod resolve_candidates;

pub use resolve_candidates::{
    ResolutionTier, ResolveCandidatesHandler, ResolvedCandidates,
};
