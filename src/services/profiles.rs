use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::models::{NewProfile, Profile};
use crate::services::store::{ProfileRepository, StorageError};

/// Errors that can occur when submitting or reading profiles
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Where a resolved profile came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileSource {
    Stored,
    Demo,
}

/// Profile chosen for a recommendation pass
#[derive(Debug, Clone)]
pub struct ResolvedProfile {
    pub profile: Profile,
    pub source: ProfileSource,
}

/// Profile submission and lookup on top of a snapshot repository
#[derive(Clone)]
pub struct ProfileService {
    repository: Arc<dyn ProfileRepository>,
}

impl ProfileService {
    pub fn new(repository: Arc<dyn ProfileRepository>) -> Self {
        Self { repository }
    }

    /// Validate and store a new snapshot under a freshly generated id
    pub async fn submit(&self, mut submission: NewProfile) -> Result<Profile, ProfileError> {
        for field in [
            &mut submission.name,
            &mut submission.email,
            &mut submission.education,
            &mut submission.institution,
            &mut submission.location,
        ] {
            *field = field.trim().to_string();
        }
        submission.validate()?;

        let profile = Profile {
            id: uuid::Uuid::new_v4().to_string(),
            name: submission.name,
            email: Some(submission.email),
            education: submission.education,
            institution: submission.institution,
            location: submission.location,
            skills: normalize_labels(submission.skills),
            interests: normalize_labels(submission.interests),
            bio: submission.bio,
            gpa: submission.gpa.trim().to_string(),
            year: submission.year.trim().to_string(),
            created_at: Some(chrono::Utc::now()),
        };

        self.repository.put(&profile.id, &profile).await?;

        tracing::info!(
            "Stored profile {} ({} skills, {} interests)",
            profile.id,
            profile.skills.len(),
            profile.interests.len()
        );

        Ok(profile)
    }

    /// Fetch a stored snapshot without any fallback
    pub async fn get(&self, id: &str) -> Result<Option<Profile>, ProfileError> {
        Ok(self.repository.get(id).await?)
    }

    /// Resolve the profile to match against
    ///
    /// Uses the snapshot named by `id` when it can be read; otherwise the
    /// demo profile. Storage failures are logged, never returned.
    pub async fn resolve(&self, id: Option<&str>) -> ResolvedProfile {
        let Some(id) = id.map(str::trim).filter(|id| !id.is_empty()) else {
            tracing::debug!("No profile id supplied, using demo profile");
            return demo();
        };

        match self.repository.get(id).await {
            Ok(Some(profile)) => ResolvedProfile {
                profile,
                source: ProfileSource::Stored,
            },
            Ok(None) => {
                tracing::info!("Profile {} not found, using demo profile", id);
                demo()
            }
            Err(e) => {
                tracing::warn!("Failed to load profile {}, using demo profile: {}", id, e);
                demo()
            }
        }
    }
}

fn demo() -> ResolvedProfile {
    ResolvedProfile {
        profile: Profile::demo(),
        source: ProfileSource::Demo,
    }
}

/// Trim labels, drop blanks and exact duplicates, keep first-seen order
fn normalize_labels(labels: Vec<String>) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::with_capacity(labels.len());

    for label in labels {
        let label = label.trim();
        if !label.is_empty() && !normalized.iter().any(|existing| existing == label) {
            normalized.push(label.to_string());
        }
    }

    normalized
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::store::MemoryProfileRepository;

    fn service() -> ProfileService {
        ProfileService::new(Arc::new(MemoryProfileRepository::new(100)))
    }

    fn submission() -> NewProfile {
        NewProfile {
            name: "  Rahul Verma ".to_string(),
            email: " rahul@example.com".to_string(),
            education: "Computer Science".to_string(),
            institution: "IIT Delhi".to_string(),
            location: "Delhi, India ".to_string(),
            skills: vec![
                "JavaScript".to_string(),
                " React ".to_string(),
                "".to_string(),
                "JavaScript".to_string(),
            ],
            interests: vec!["Web Development".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_normalize_labels() {
        let labels = vec![
            "Git".to_string(),
            "  ".to_string(),
            "SQL ".to_string(),
            "Git".to_string(),
            "git".to_string(),
        ];

        assert_eq!(normalize_labels(labels), vec!["Git", "SQL", "git"]);
    }

    #[tokio::test]
    async fn test_submit_then_resolve() {
        let service = service();

        let profile = service.submit(submission()).await.unwrap();
        assert_eq!(profile.name, "Rahul Verma");
        assert_eq!(profile.email.as_deref(), Some("rahul@example.com"));
        assert_eq!(profile.location, "Delhi, India");
        assert_eq!(profile.skills, vec!["JavaScript", "React"]);
        assert!(profile.created_at.is_some());

        let resolved = service.resolve(Some(&profile.id)).await;
        assert_eq!(resolved.source, ProfileSource::Stored);
        assert_eq!(resolved.profile, profile);
    }

    #[tokio::test]
    async fn test_each_submission_gets_new_id() {
        let service = service();

        let first = service.submit(submission()).await.unwrap();
        let second = service.submit(submission()).await.unwrap();

        assert_ne!(first.id, second.id);
        assert!(service.get(&first.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_submit_rejects_invalid() {
        let service = service();
        let mut invalid = submission();
        invalid.name = "   ".to_string();
        invalid.email = "not-an-email".to_string();

        let result = service.submit(invalid).await;

        assert!(matches!(result, Err(ProfileError::Validation(_))));
    }

    #[tokio::test]
    async fn test_submit_requires_contact_and_background() {
        let service = service();

        let mut blank_institution = submission();
        blank_institution.institution = "  ".to_string();
        let Err(ProfileError::Validation(errors)) = service.submit(blank_institution).await else {
            panic!("blank institution accepted");
        };
        assert!(errors.field_errors().contains_key("institution"));

        let mut no_email = submission();
        no_email.email = String::new();
        let Err(ProfileError::Validation(errors)) = service.submit(no_email).await else {
            panic!("missing email accepted");
        };
        assert!(errors.field_errors().contains_key("email"));

        let mut no_location = submission();
        no_location.location = String::new();
        assert!(service.submit(no_location).await.is_err());
    }

    #[tokio::test]
    async fn test_resolve_falls_back_to_demo() {
        let service = service();

        let missing = service.resolve(Some("unknown")).await;
        assert_eq!(missing.source, ProfileSource::Demo);
        assert_eq!(missing.profile.name, "Demo Student");

        let absent = service.resolve(None).await;
        assert_eq!(absent.source, ProfileSource::Demo);

        let blank = service.resolve(Some("  ")).await;
        assert_eq!(blank.source, ProfileSource::Demo);
    }
}
