use crate::core::filters::matches_filter;
use crate::models::{Posting, PostingFilter};

/// Read-only catalog of internship postings
#[derive(Debug, Clone)]
pub struct Catalog {
    postings: Vec<Posting>,
}

impl Catalog {
    pub fn new(postings: Vec<Posting>) -> Self {
        Self { postings }
    }

    /// The built-in sample catalog
    pub fn builtin() -> Self {
        Self::new(vec![
            posting(
                1,
                "Software Engineering Intern",
                "TechMahindra",
                "Bangalore, Karnataka",
                "Full-time",
                "3 months",
                "₹25,000/month",
                "Join our engineering team to work on cutting-edge web applications using React and Node.js.",
                &["JavaScript", "React", "Node.js", "TypeScript", "Git"],
                "Software Development",
            ),
            posting(
                2,
                "Frontend Developer Intern",
                "Wipro",
                "Hyderabad, Telangana",
                "Full-time",
                "4 months",
                "₹22,000/month",
                "Build responsive web applications and improve user experience.",
                &["React", "TypeScript", "CSS", "HTML", "JavaScript"],
                "Web Development",
            ),
            posting(
                3,
                "Data Science Intern",
                "Infosys Limited",
                "Pune, Maharashtra",
                "Full-time",
                "4 months",
                "₹30,000/month",
                "Work with machine learning models and analyze large datasets.",
                &["Python", "Machine Learning", "SQL", "Pandas", "TensorFlow"],
                "Data Science",
            ),
            posting(
                4,
                "Full Stack Developer Intern",
                "Flipkart",
                "Gurgaon, Haryana",
                "Full-time",
                "5 months",
                "₹24,000/month",
                "Work on both frontend and backend systems using modern technologies.",
                &["JavaScript", "React", "Node.js", "MongoDB", "Express"],
                "Software Development",
            ),
            posting(
                5,
                "Mobile App Developer Intern",
                "Paytm",
                "Chennai, Tamil Nadu",
                "Full-time",
                "3 months",
                "₹26,000/month",
                "Develop mobile applications for iOS and Android platforms.",
                &["React Native", "JavaScript", "Mobile Development", "iOS", "Android"],
                "Mobile Development",
            ),
            listing(
                posting(
                    6,
                    "UI/UX Design Intern",
                    "Zomato",
                    "Gurgaon, Haryana",
                    "Part-time",
                    "6 months",
                    "₹15,000/month",
                    "Create beautiful and intuitive user interfaces for web and mobile applications.",
                    &["Figma", "Adobe Creative Suite", "UI/UX Design", "Prototyping", "User Research"],
                    "Design",
                ),
                &["Design portfolio", "Design tools experience", "Creative thinking"],
                "3 days ago",
                28,
                4.7,
            ),
            listing(
                posting(
                    7,
                    "Marketing Intern",
                    "Flipkart",
                    "Mumbai, Maharashtra",
                    "Full-time",
                    "3 months",
                    "₹16,000/month",
                    "Help develop and execute marketing campaigns across digital and traditional channels.",
                    &["Social Media", "Content Writing", "Google Analytics", "SEO", "Marketing"],
                    "Marketing",
                ),
                &["Marketing or Communications student", "Social media experience", "Creative writing"],
                "5 days ago",
                38,
                4.6,
            ),
            listing(
                posting(
                    8,
                    "Financial Analyst Intern",
                    "HDFC Bank",
                    "Chennai, Tamil Nadu",
                    "Full-time",
                    "4 months",
                    "₹19,000/month",
                    "Assist with financial modeling, market research, and investment analysis.",
                    &["Excel", "Financial Modeling", "Data Analysis", "Bloomberg Terminal", "Finance"],
                    "Finance",
                ),
                &["Finance or Economics student", "Excel proficiency", "Analytical skills"],
                "1 day ago",
                56,
                4.5,
            ),
            listing(
                posting(
                    9,
                    "DevOps Intern",
                    "Tata Consultancy Services",
                    "Chennai, Tamil Nadu",
                    "Full-time",
                    "4 months",
                    "₹18,500/month",
                    "Learn cloud technologies and help automate deployment processes.",
                    &["AWS", "Docker", "Kubernetes", "Linux", "CI/CD"],
                    "Cloud Computing",
                ),
                &["Basic cloud knowledge", "Linux familiarity", "Eagerness to learn"],
                "3 days ago",
                38,
                4.7,
            ),
            listing(
                posting(
                    10,
                    "Software Developer Intern",
                    "Cognizant",
                    "Chennai, Tamil Nadu",
                    "Full-time",
                    "3 months",
                    "₹17,000/month",
                    "Work on enterprise software solutions using Java and Spring framework.",
                    &["Java", "Spring Boot", "SQL", "REST APIs", "Git"],
                    "Software Development",
                ),
                &["Computer Science background", "Java knowledge", "Problem-solving skills"],
                "2 days ago",
                42,
                4.6,
            ),
            listing(
                posting(
                    11,
                    "Backend Developer Intern",
                    "Freshworks",
                    "Chennai, Tamil Nadu",
                    "Full-time",
                    "5 months",
                    "₹20,000/month",
                    "Build scalable backend services and APIs for web applications.",
                    &["Node.js", "Express", "MongoDB", "RESTful APIs", "JavaScript"],
                    "Web Development",
                ),
                &["Backend development interest", "Database knowledge", "API design understanding"],
                "1 week ago",
                29,
                4.8,
            ),
            listing(
                posting(
                    12,
                    "Mobile App Development Intern",
                    "Paytm",
                    "Noida, Uttar Pradesh",
                    "Full-time",
                    "5 months",
                    "₹18,000/month",
                    "Develop mobile applications for iOS and Android platforms using React Native.",
                    &["React Native", "JavaScript", "Mobile Development", "iOS", "Android"],
                    "Mobile Development",
                ),
                &["Mobile development experience", "React knowledge", "App store submission"],
                "4 days ago",
                34,
                4.8,
            ),
        ])
    }

    pub fn postings(&self) -> &[Posting] {
        &self.postings
    }

    pub fn get(&self, id: u32) -> Option<&Posting> {
        self.postings.iter().find(|posting| posting.id == id)
    }

    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    /// Postings passing the filter, in catalog order
    pub fn search(&self, filter: &PostingFilter) -> Vec<&Posting> {
        self.postings
            .iter()
            .filter(|posting| matches_filter(posting, filter))
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[allow(clippy::too_many_arguments)]
fn posting(
    id: u32,
    title: &str,
    organization: &str,
    location: &str,
    kind: &str,
    duration: &str,
    stipend: &str,
    description: &str,
    required_skills: &[&str],
    category: &str,
) -> Posting {
    Posting {
        id,
        title: title.to_string(),
        organization: organization.to_string(),
        location: location.to_string(),
        kind: kind.to_string(),
        duration: duration.to_string(),
        stipend: stipend.to_string(),
        description: description.to_string(),
        required_skills: required_skills.iter().map(|s| s.to_string()).collect(),
        category: category.to_string(),
        requirements: Vec::new(),
        posted: None,
        applicants: None,
        rating: None,
    }
}

/// Attach listing-page metadata to a posting
fn listing(
    mut posting: Posting,
    requirements: &[&str],
    posted: &str,
    applicants: u32,
    rating: f32,
) -> Posting {
    posting.requirements = requirements.iter().map(|s| s.to_string()).collect();
    posting.posted = Some(posted.to_string());
    posting.applicants = Some(applicants);
    posting.rating = Some(rating);
    posting
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_ids_unique() {
        let catalog = Catalog::builtin();
        let ids: HashSet<u32> = catalog.postings().iter().map(|p| p.id).collect();

        assert_eq!(ids.len(), catalog.len());
        assert!(catalog.postings().iter().all(|p| !p.required_skills.is_empty()));
    }

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::builtin();

        assert_eq!(catalog.get(3).map(|p| p.organization.as_str()), Some("Infosys Limited"));
        assert!(catalog.get(999).is_none());
    }

    #[test]
    fn test_search_keeps_catalog_order() {
        let catalog = Catalog::builtin();
        let filter = PostingFilter {
            location: Some("Chennai".to_string()),
            ..Default::default()
        };

        let ids: Vec<u32> = catalog.search(&filter).iter().map(|p| p.id).collect();

        assert_eq!(ids, vec![5, 8, 9, 10, 11]);
    }

    #[test]
    fn test_search_reaches_listing_postings() {
        let catalog = Catalog::builtin();
        let search = |term: &str| -> Vec<u32> {
            let filter = PostingFilter {
                search: Some(term.to_string()),
                ..Default::default()
            };
            catalog.search(&filter).iter().map(|p| p.id).collect()
        };

        assert_eq!(search("spring"), vec![10]);
        assert_eq!(search("freshworks"), vec![11]);
        assert_eq!(search("paytm"), vec![5, 12]);
    }

    #[test]
    fn test_listing_metadata() {
        let catalog = Catalog::builtin();

        let cognizant = catalog.get(10).unwrap();
        assert_eq!(cognizant.requirements.len(), 3);
        assert_eq!(cognizant.posted.as_deref(), Some("2 days ago"));
        assert_eq!(cognizant.applicants, Some(42));

        let techmahindra = catalog.get(1).unwrap();
        assert!(techmahindra.requirements.is_empty());
        assert!(techmahindra.rating.is_none());
    }
}
