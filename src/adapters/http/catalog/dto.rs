//! HTTP DTOs for catalog endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::catalog::{ResolutionTier, ResolvedCandidates};
use crate::domain::catalog::CandidateMetadata;

/// Query parameters for the candidate listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ListCandidatesQuery {
    #[serde(default)]
    pub filter: Option<String>,
}

/// A candidate movie for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateResponse {
    pub id: String,
    pub title: String,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artwork_url: Option<String>,
}

impl From<CandidateMetadata> for CandidateResponse {
    fn from(meta: CandidateMetadata) -> Self {
        Self {
            id: meta.id.to_string(),
            title: meta.title,
            summary: meta.summary,
            artwork_url: meta.artwork_url,
        }
    }
}

/// Candidate listing with resolution provenance.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateListResponse {
    pub candidates: Vec<CandidateResponse>,
    /// Which tier served this set: fresh, fetched, stale, or default.
    pub source: String,
}

impl From<ResolvedCandidates> for CandidateListResponse {
    fn from(resolved: ResolvedCandidates) -> Self {
        let source = match resolved.tier {
            ResolutionTier::Fresh => "fresh",
            ResolutionTier::Fetched => "fetched",
            ResolutionTier::Stale => "stale",
            ResolutionTier::Default => "default",
        };
        Self {
            candidates: resolved.candidates.into_iter().map(Into::into).collect(),
            source: source.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::CandidateId;

    #[test]
    fn list_response_names_the_tier() {
        let resolved = ResolvedCandidates {
            candidates: vec![CandidateMetadata::new(
                CandidateId::new("tt0133093").unwrap(),
                "The Matrix",
                "A hacker learns the true nature of his reality.",
                None,
            )],
            tier: ResolutionTier::Stale,
        };

        let response: CandidateListResponse = resolved.into();
        assert_eq!(response.source, "stale");
        assert_eq!(response.candidates.len(), 1);
    }
}
