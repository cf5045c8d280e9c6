use crate::core::scoring::{calculate_match_score, normalize_skills};
use crate::models::{
    Candidate, CandidateMatch, MatchLabel, MatchingWeights, Posting, Profile, Recommendation,
};

/// Main matching orchestrator - ranks catalog postings for a profile
///
/// # Pipeline Stages
/// 1. Skill partition (matched / missing) per posting
/// 2. Overlap score plus interest bonus
/// 3. Stable ranking by descending score, truncated to the limit
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: MatchingWeights,
}

impl Matcher {
    pub fn new(weights: MatchingWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: MatchingWeights::default(),
        }
    }

    pub fn weights(&self) -> &MatchingWeights {
        &self.weights
    }

    /// Rank postings against a set of skills and interests
    ///
    /// # Arguments
    /// * `skills` - Declared profile skills (compared case-insensitively)
    /// * `interests` - Declared profile interests
    /// * `catalog` - Postings to rank
    ///
    /// # Returns
    /// At most `limit` recommendations, highest score first. Postings with
    /// equal scores keep their catalog order.
    pub fn recommend<'a>(
        &self,
        skills: &[String],
        interests: &[String],
        catalog: &'a [Posting],
    ) -> Vec<Recommendation<'a>> {
        let profile_skills = normalize_skills(skills);

        let mut recommendations: Vec<Recommendation<'a>> = catalog
            .iter()
            .map(|posting| {
                let (match_score, matched_skills, missing_skills) =
                    calculate_match_score(posting, &profile_skills, interests, &self.weights);

                Recommendation {
                    posting,
                    match_score,
                    match_label: MatchLabel::from_score(match_score),
                    matched_skills,
                    missing_skills,
                }
            })
            .collect();

        // sort_by is stable, so ties stay in catalog order
        recommendations.sort_by(|a, b| b.match_score.cmp(&a.match_score));
        recommendations.truncate(self.weights.limit);

        recommendations
    }

    /// Rank postings for a stored or demo profile
    pub fn recommend_for<'a>(
        &self,
        profile: &Profile,
        catalog: &'a [Posting],
    ) -> Vec<Recommendation<'a>> {
        self.recommend(&profile.skills, &profile.interests, catalog)
    }

    /// Rank candidates against one posting
    ///
    /// Uses the same score as [`Matcher::recommend`] with the roles swapped.
    /// Every candidate is returned; ties keep pool order.
    pub fn rank_candidates<'a>(
        &self,
        posting: &Posting,
        candidates: &'a [Candidate],
    ) -> Vec<CandidateMatch<'a>> {
        let mut ranked: Vec<CandidateMatch<'a>> = candidates
            .iter()
            .map(|candidate| {
                let skills = normalize_skills(&candidate.skills);
                let (match_score, matched_skills, missing_skills) =
                    calculate_match_score(posting, &skills, &candidate.interests, &self.weights);

                CandidateMatch {
                    candidate,
                    match_score,
                    match_label: MatchLabel::from_score(match_score),
                    matched_skills,
                    missing_skills,
                }
            })
            .collect();

        ranked.sort_by(|a, b| b.match_score.cmp(&a.match_score));

        ranked
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_posting(id: u32, skills: &[&str], category: &str) -> Posting {
        Posting {
            id,
            title: format!("Posting {}", id),
            organization: "Acme".to_string(),
            location: "Pune, Maharashtra".to_string(),
            kind: "Full-time".to_string(),
            duration: "3 months".to_string(),
            stipend: "₹20,000/month".to_string(),
            description: String::new(),
            required_skills: skills.iter().map(|s| s.to_string()).collect(),
            category: category.to_string(),
            requirements: vec![],
            posted: None,
            applicants: None,
            rating: None,
        }
    }

    fn create_candidate(id: u32, skills: &[&str], interests: &[&str]) -> Candidate {
        Candidate {
            id,
            name: format!("Candidate {}", id),
            email: format!("candidate{}@example.com", id),
            education: "Computer Science".to_string(),
            year: "Junior".to_string(),
            gpa: "3.5".to_string(),
            location: "Pune, Maharashtra".to_string(),
            skills: strings(skills),
            interests: strings(interests),
            applied_for: "Posting 1".to_string(),
        }
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_recommend_sorted_by_score() {
        let matcher = Matcher::with_default_weights();
        let catalog = vec![
            create_posting(1, &["Python", "SQL"], "Data Science"),
            create_posting(2, &["JavaScript", "React"], "Web Development"),
            create_posting(3, &["JavaScript", "Go"], "Backend"),
        ];

        let result = matcher.recommend(&strings(&["JavaScript", "React"]), &[], &catalog);

        let ids: Vec<u32> = result.iter().map(|r| r.posting.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
        assert_eq!(result[0].match_score, 100);
        assert_eq!(result[1].match_score, 50);
        assert_eq!(result[2].match_score, 0);
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let matcher = Matcher::with_default_weights();
        let catalog = vec![
            create_posting(7, &["Rust"], "Systems"),
            create_posting(3, &["Rust"], "Systems"),
            create_posting(5, &["Rust"], "Systems"),
        ];

        let result = matcher.recommend(&strings(&["rust"]), &[], &catalog);

        let ids: Vec<u32> = result.iter().map(|r| r.posting.id).collect();
        assert_eq!(ids, vec![7, 3, 5]);
    }

    #[test]
    fn test_respects_limit() {
        let matcher = Matcher::with_default_weights();
        let catalog: Vec<Posting> = (0..12)
            .map(|i| create_posting(i, &["Git"], "Software Development"))
            .collect();

        let result = matcher.recommend(&strings(&["Git"]), &[], &catalog);

        assert_eq!(result.len(), 5);
    }

    #[test]
    fn test_empty_catalog() {
        let matcher = Matcher::with_default_weights();

        let result = matcher.recommend(&strings(&["Git"]), &strings(&["DevOps"]), &[]);

        assert!(result.is_empty());
    }

    #[test]
    fn test_empty_skills_yield_zero_scores() {
        let matcher = Matcher::with_default_weights();
        let catalog = vec![create_posting(1, &["Python"], "Data Science")];

        let result = matcher.recommend(&[], &[], &catalog);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].match_score, 0);
        assert_eq!(result[0].match_label, MatchLabel::Fair);
        assert_eq!(result[0].missing_skills, vec!["Python"]);
    }

    #[test]
    fn test_custom_weights() {
        let matcher = Matcher::new(MatchingWeights {
            interest_bonus: 25,
            limit: 1,
        });
        let catalog = vec![
            create_posting(1, &["Python", "SQL"], "Data Science"),
            create_posting(2, &["Python", "SQL"], "Finance"),
        ];

        assert_eq!(matcher.weights().interest_bonus, 25);
        assert_eq!(matcher.weights().limit, 1);

        let result = matcher.recommend(&strings(&["SQL"]), &strings(&["finance"]), &catalog);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].posting.id, 2);
        assert_eq!(result[0].match_score, 75);
    }

    #[test]
    fn test_rank_candidates_returns_everyone() {
        let matcher = Matcher::with_default_weights();
        let posting = create_posting(1, &["Rust", "SQL"], "Backend");
        let pool: Vec<Candidate> = (0..8)
            .map(|i| create_candidate(i, &["Rust"], &[]))
            .chain(std::iter::once(create_candidate(8, &["rust", "sql"], &["backend"])))
            .collect();

        let ranked = matcher.rank_candidates(&posting, &pool);

        assert_eq!(ranked.len(), 9);
        assert_eq!(ranked[0].candidate.id, 8);
        assert_eq!(ranked[0].match_score, 100);
        assert_eq!(ranked[0].matched_skills, vec!["Rust", "SQL"]);

        let tied: Vec<u32> = ranked[1..].iter().map(|m| m.candidate.id).collect();
        assert_eq!(tied, (0..8).collect::<Vec<u32>>());
        assert!(ranked[1..].iter().all(|m| m.missing_skills == vec!["SQL"]));
    }
}
