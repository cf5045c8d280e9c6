//! Intern Match - internship recommendation service
//!
//! This library ranks a read-only catalog of internship postings against a
//! student profile by skill overlap, with a flat bonus when one of the
//! student's interests aligns with the posting category. Profiles are stored
//! as whole snapshots behind a pluggable repository.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{CandidatePool, Catalog, Matcher};
pub use models::{Profile, Posting, Recommendation, MatchLabel, MatchingWeights, PostingFilter, NewProfile};
pub use services::{ProfileService, ProfileRepository, MemoryProfileRepository, FileProfileRepository};
