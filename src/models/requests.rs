use serde::{Deserialize, Serialize};
use validator::Validate;

/// Profile submission
///
/// Name, email, education, institution and location are required; the rest
/// may be left empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct NewProfile {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(email)]
    #[serde(default)]
    pub email: String,
    #[validate(length(min = 1, max = 200))]
    #[serde(default)]
    pub education: String,
    #[validate(length(min = 1, max = 200))]
    #[serde(default)]
    pub institution: String,
    #[validate(length(min = 1, max = 200))]
    #[serde(default)]
    pub location: String,
    #[validate(length(max = 50))]
    #[serde(default)]
    pub skills: Vec<String>,
    #[validate(length(max = 50))]
    #[serde(default)]
    pub interests: Vec<String>,
    #[validate(length(max = 2000))]
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub gpa: String,
    #[serde(default)]
    pub year: String,
}

/// Query for the recommendations endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendationsQuery {
    #[serde(alias = "profile_id", rename = "profileId", default)]
    pub profile_id: Option<String>,
}
