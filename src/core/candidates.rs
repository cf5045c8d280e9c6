use crate::models::Candidate;

/// Read-only pool of applicants an organization can rank against its postings
#[derive(Debug, Clone)]
pub struct CandidatePool {
    candidates: Vec<Candidate>,
}

impl CandidatePool {
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self { candidates }
    }

    /// The built-in sample applicants
    pub fn builtin() -> Self {
        Self::new(vec![
            candidate(
                1,
                "Alex Johnson",
                "alex.johnson@email.com",
                "Computer Science, Stanford University",
                "Junior",
                "3.8",
                "San Francisco, CA",
                &["JavaScript", "React", "Node.js", "Python", "Git"],
                &["Software Development", "Web Development", "AI/ML"],
                "Software Engineering Intern",
            ),
            candidate(
                2,
                "Sarah Chen",
                "sarah.chen@email.com",
                "Data Science, MIT",
                "Senior",
                "3.9",
                "Boston, MA",
                &["Python", "Machine Learning", "SQL", "TensorFlow", "Pandas"],
                &["Data Science", "AI/ML", "Research"],
                "Data Science Intern",
            ),
            candidate(
                3,
                "Michael Rodriguez",
                "michael.r@email.com",
                "Business Administration, UC Berkeley",
                "Sophomore",
                "3.7",
                "San Francisco, CA",
                &["Marketing", "Social Media", "Content Writing", "Analytics"],
                &["Marketing", "Digital Strategy", "Brand Management"],
                "Marketing Intern",
            ),
        ])
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

impl Default for CandidatePool {
    fn default() -> Self {
        Self::builtin()
    }
}

#[allow(clippy::too_many_arguments)]
fn candidate(
    id: u32,
    name: &str,
    email: &str,
    education: &str,
    year: &str,
    gpa: &str,
    location: &str,
    skills: &[&str],
    interests: &[&str],
    applied_for: &str,
) -> Candidate {
    Candidate {
        id,
        name: name.to_string(),
        email: email.to_string(),
        education: education.to_string(),
        year: year.to_string(),
        gpa: gpa.to_string(),
        location: location.to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        interests: interests.iter().map(|s| s.to_string()).collect(),
        applied_for: applied_for.to_string(),
    }
}
