use serde::{Deserialize, Serialize};
use crate::models::domain::{CandidateMatch, Posting, Profile, Recommendation};
use crate::services::ProfileSource;

/// Response for the recommendations endpoint
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationsResponse<'a> {
    pub profile: Profile,
    pub source: ProfileSource,
    pub recommendations: Vec<Recommendation<'a>>,
    #[serde(rename = "totalPostings")]
    pub total_postings: usize,
}

/// Response for the posting browse endpoint
#[derive(Debug, Clone, Serialize)]
pub struct PostingsResponse<'a> {
    pub postings: Vec<&'a Posting>,
    pub total: usize,
}

/// Response for the candidate ranking endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CandidatesResponse<'a> {
    pub posting: &'a Posting,
    pub candidates: Vec<CandidateMatch<'a>>,
    pub total: usize,
}

/// Response for a profile submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProfileResponse {
    pub profile: Profile,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
