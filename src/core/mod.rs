// Core algorithm exports
pub mod candidates;
pub mod catalog;
pub mod filters;
pub mod matcher;
pub mod scoring;

pub use candidates::CandidatePool;
pub use catalog::Catalog;
pub use filters::matches_filter;
pub use matcher::Matcher;
pub use scoring::{calculate_match_score, has_interest_match, skill_overlap_score};
