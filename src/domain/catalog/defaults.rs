//! Static default candidate set.
//!
//! The last tier of the catalog fallback chain: when there is no cache
//! entry at all and the external source is down, callers still receive
//! a non-empty, well-formed candidate list.

use once_cell::sync::Lazy;

use crate::domain::catalog::CandidateMetadata;
use crate::domain::foundation::CandidateId;

static DEFAULT_CANDIDATES: Lazy<Vec<CandidateMetadata>> = Lazy::new(|| {
    vec![
        CandidateMetadata::new(
            CandidateId::new("tt0111161").expect("static id"),
            "The Shawshank Redemption",
            "Two imprisoned men bond over a number of years.",
            None,
        ),
        CandidateMetadata::new(
            CandidateId::new("tt0133093").expect("static id"),
            "The Matrix",
            "A hacker learns the true nature of his reality.",
            None,
        ),
        CandidateMetadata::new(
            CandidateId::new("tt0110912").expect("static id"),
            "Pulp Fiction",
            "The lives of two mob hitmen, a boxer and others intertwine.",
            None,
        ),
        CandidateMetadata::new(
            CandidateId::new("tt0088763").expect("static id"),
            "Back to the Future",
            "A teenager is accidentally sent thirty years into the past.",
            None,
        ),
        CandidateMetadata::new(
            CandidateId::new("tt4633694").expect("static id"),
            "Spider-Man: Into the Spider-Verse",
            "Teenager Miles Morales becomes Spider-Man.",
            None,
        ),
    ]
});

/// Returns the hardcoded minimal candidate set.
pub fn default_candidates() -> Vec<CandidateMetadata> {
    DEFAULT_CANDIDATES.clone()
}
