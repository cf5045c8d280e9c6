use std::collections::HashSet;

use crate::models::{MatchingWeights, Posting};

/// Calculate a match score (0-100) for a posting
///
/// Scoring formula:
/// score = min(100,
///     round(100 * |matched| / |required|) +   # skill overlap
///     interest_bonus                          # any interest aligns with category
/// )
///
/// A posting without required skills always scores 0.
///
/// `profile_skills` must already be lowercased (see [`normalize_skills`]).
/// Returns the score together with the matched and missing skills, both in
/// posting order.
pub fn calculate_match_score(
    posting: &Posting,
    profile_skills: &HashSet<String>,
    profile_interests: &[String],
    weights: &MatchingWeights,
) -> (u8, Vec<String>, Vec<String>) {
    let (matched, missing) = partition_skills(&posting.required_skills, profile_skills);

    if posting.required_skills.is_empty() {
        return (0, matched, missing);
    }

    let base = skill_overlap_score(matched.len(), posting.required_skills.len());
    let bonus = if has_interest_match(profile_interests, &posting.category) {
        weights.interest_bonus
    } else {
        0
    };

    (base.saturating_add(bonus).min(100), matched, missing)
}

/// Lowercase a profile's skills for case-insensitive lookup
pub fn normalize_skills(skills: &[String]) -> HashSet<String> {
    skills.iter().map(|skill| skill.to_lowercase()).collect()
}

/// Split required skills into those the profile has and those it lacks
#[inline]
pub fn partition_skills(
    required: &[String],
    profile_skills: &HashSet<String>,
) -> (Vec<String>, Vec<String>) {
    required
        .iter()
        .cloned()
        .partition(|skill| profile_skills.contains(&skill.to_lowercase()))
}

/// Percentage of required skills covered, rounded half up
#[inline]
pub fn skill_overlap_score(matched: usize, required: usize) -> u8 {
    if required == 0 {
        return 0;
    }

    // Integer form of round(100 * matched / required)
    let percent = (200 * matched + required) / (2 * required);
    percent.min(100) as u8
}

/// True if any interest contains the category or is contained by it
///
/// Comparison is case-insensitive on the labels as given, so an empty
/// interest matches every category.
#[inline]
pub fn has_interest_match(interests: &[String], category: &str) -> bool {
    let category = category.to_lowercase();

    interests
        .iter()
        .map(|interest| interest.to_lowercase())
        .any(|interest| category.contains(&interest) || interest.contains(&category))
}
