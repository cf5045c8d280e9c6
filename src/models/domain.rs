use serde::{Deserialize, Serialize};

/// Student profile snapshot
///
/// Stored whole under its `id`; a later submission produces a new snapshot
/// rather than mutating this one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub gpa: String,
    #[serde(default)]
    pub year: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Profile {
    /// Profile used when no stored snapshot can be resolved
    pub fn demo() -> Self {
        Self {
            id: "demo".to_string(),
            name: "Demo Student".to_string(),
            email: None,
            education: "Computer Science".to_string(),
            institution: String::new(),
            location: "Bangalore, Karnataka".to_string(),
            skills: vec![
                "JavaScript".to_string(),
                "React".to_string(),
                "Python".to_string(),
                "Node.js".to_string(),
            ],
            interests: vec![
                "Software Development".to_string(),
                "Web Development".to_string(),
            ],
            bio: String::new(),
            gpa: String::new(),
            year: String::new(),
            created_at: None,
        }
    }
}

/// Internship posting from the read-only catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Posting {
    pub id: u32,
    pub title: String,
    pub organization: String,
    pub location: String,
    /// Engagement kind, e.g. "Full-time" or "Part-time"
    pub kind: String,
    pub duration: String,
    pub stipend: String,
    pub description: String,
    #[serde(rename = "requiredSkills")]
    pub required_skills: Vec<String>,
    pub category: String,
    /// Applicant prerequisites shown on the listing page
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub posted: Option<String>,
    #[serde(default)]
    pub applicants: Option<u32>,
    #[serde(default)]
    pub rating: Option<f32>,
}

/// Coarse band for a match score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchLabel {
    Excellent,
    Great,
    Good,
    Fair,
}

impl MatchLabel {
    pub fn from_score(score: u8) -> Self {
        match score {
            90.. => MatchLabel::Excellent,
            80..=89 => MatchLabel::Great,
            70..=79 => MatchLabel::Good,
            _ => MatchLabel::Fair,
        }
    }
}

/// Ranked pairing of a profile against one posting
///
/// Derived per request and never stored. `matched` and `missing` partition
/// `posting.required_skills`, both in posting order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation<'a> {
    pub posting: &'a Posting,
    #[serde(rename = "matchScore")]
    pub match_score: u8,
    #[serde(rename = "matchLabel")]
    pub match_label: MatchLabel,
    #[serde(rename = "matchedSkills")]
    pub matched_skills: Vec<String>,
    #[serde(rename = "missingSkills")]
    pub missing_skills: Vec<String>,
}

/// Applicant in the organization-side candidate pool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub education: String,
    pub year: String,
    pub gpa: String,
    pub location: String,
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    /// Title of the posting the candidate applied for
    #[serde(rename = "appliedFor")]
    pub applied_for: String,
}

/// Ranked pairing of a candidate against one posting
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateMatch<'a> {
    pub candidate: &'a Candidate,
    #[serde(rename = "matchScore")]
    pub match_score: u8,
    #[serde(rename = "matchLabel")]
    pub match_label: MatchLabel,
    #[serde(rename = "matchedSkills")]
    pub matched_skills: Vec<String>,
    #[serde(rename = "missingSkills")]
    pub missing_skills: Vec<String>,
}

/// Matching parameters
#[derive(Debug, Clone, Copy)]
pub struct MatchingWeights {
    /// Flat bonus added when an interest aligns with the posting category
    pub interest_bonus: u8,
    /// Maximum number of recommendations returned
    pub limit: usize,
}

impl Default for MatchingWeights {
    fn default() -> Self {
        Self {
            interest_bonus: 10,
            limit: 5,
        }
    }
}

/// Optional criteria for browsing the catalog
///
/// Empty fields, and the literal `all` for the select-style fields, match
/// every posting.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostingFilter {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
}
