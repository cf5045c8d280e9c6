use crate::models::{Posting, PostingFilter};

/// Check if a posting passes every criterion of a browse filter
#[inline]
pub fn matches_filter(posting: &Posting, filter: &PostingFilter) -> bool {
    matches_search(posting, filter.search.as_deref())
        && matches_location(posting, filter.location.as_deref())
        && matches_kind(posting, filter.kind.as_deref())
        && matches_duration(posting, filter.duration.as_deref())
}

/// Free-text search over title, organization and required skills
#[inline]
pub fn matches_search(posting: &Posting, search: Option<&str>) -> bool {
    let term = match search.map(str::trim) {
        Some(term) if !term.is_empty() => term.to_lowercase(),
        _ => return true,
    };

    posting.title.to_lowercase().contains(&term)
        || posting.organization.to_lowercase().contains(&term)
        || posting
            .required_skills
            .iter()
            .any(|skill| skill.to_lowercase().contains(&term))
}

/// Location substring match; `remote` also matches fully remote postings
#[inline]
pub fn matches_location(posting: &Posting, location: Option<&str>) -> bool {
    let Some(wanted) = selected(location) else {
        return true;
    };

    let wanted = wanted.to_lowercase();
    let location = posting.location.to_lowercase();

    location.contains(&wanted) || (wanted == "remote" && location == "remote")
}

/// Exact engagement kind match, e.g. "Full-time"
#[inline]
pub fn matches_kind(posting: &Posting, kind: Option<&str>) -> bool {
    selected(kind).map_or(true, |kind| posting.kind == kind)
}

/// Duration substring match, e.g. "3 months"
#[inline]
pub fn matches_duration(posting: &Posting, duration: Option<&str>) -> bool {
    selected(duration).map_or(true, |duration| posting.duration.contains(duration))
}

/// A select-style value that actually narrows the result
fn selected(value: Option<&str>) -> Option<&str> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty() && !value.eq_ignore_ascii_case("all"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_posting(location: &str, kind: &str, duration: &str) -> Posting {
        Posting {
            id: 1,
            title: "Data Science Intern".to_string(),
            organization: "Infosys Limited".to_string(),
            location: location.to_string(),
            kind: kind.to_string(),
            duration: duration.to_string(),
            stipend: "₹30,000/month".to_string(),
            description: String::new(),
            required_skills: vec!["Python".to_string(), "Machine Learning".to_string()],
            category: "Data Science".to_string(),
            requirements: vec![],
            posted: None,
            applicants: None,
            rating: None,
        }
    }

    fn filter() -> PostingFilter {
        PostingFilter::default()
    }

    #[test]
    fn test_empty_filter_matches() {
        let posting = create_test_posting("Pune, Maharashtra", "Full-time", "4 months");

        assert!(matches_filter(&posting, &filter()));
    }

    #[test]
    fn test_search_fields() {
        let posting = create_test_posting("Pune, Maharashtra", "Full-time", "4 months");

        assert!(matches_search(&posting, Some("data")));
        assert!(matches_search(&posting, Some("INFOSYS")));
        assert!(matches_search(&posting, Some("learning")));
        assert!(!matches_search(&posting, Some("kubernetes")));
        assert!(matches_search(&posting, Some("   ")));
    }

    #[test]
    fn test_location_filter() {
        let posting = create_test_posting("Pune, Maharashtra", "Full-time", "4 months");
        let remote = create_test_posting("Remote", "Full-time", "4 months");

        assert!(matches_location(&posting, Some("pune")));
        assert!(matches_location(&posting, Some("all")));
        assert!(!matches_location(&posting, Some("chennai")));
        assert!(matches_location(&remote, Some("remote")));
        assert!(!matches_location(&posting, Some("remote")));
    }

    #[test]
    fn test_kind_is_exact() {
        let posting = create_test_posting("Pune, Maharashtra", "Part-time", "6 months");

        assert!(matches_kind(&posting, Some("Part-time")));
        assert!(!matches_kind(&posting, Some("part")));
        assert!(matches_kind(&posting, Some("all")));
    }

    #[test]
    fn test_combined_filter() {
        let posting = create_test_posting("Pune, Maharashtra", "Full-time", "4 months");
        let mut f = filter();
        f.search = Some("python".to_string());
        f.duration = Some("4 months".to_string());

        assert!(matches_filter(&posting, &f));

        f.kind = Some("Part-time".to_string());
        assert!(!matches_filter(&posting, &f));
    }
}
