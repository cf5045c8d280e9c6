// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Candidate, CandidateMatch, MatchLabel, MatchingWeights, Posting, PostingFilter, Profile,
    Recommendation,
};
pub use requests::{NewProfile, RecommendationsQuery};
pub use responses::{
    CandidatesResponse, CreateProfileResponse, ErrorResponse, HealthResponse, PostingsResponse,
    RecommendationsResponse,
};
