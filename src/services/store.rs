use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::Profile;

/// Errors that can occur with profile snapshot storage
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid profile id: {0}")]
    InvalidId(String),
}

/// Key-value store for whole profile snapshots
///
/// Carried in `AppState` as `Arc<dyn ProfileRepository>`.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Store a snapshot, replacing any previous one under the same id
    async fn put(&self, id: &str, profile: &Profile) -> Result<(), StorageError>;

    /// Look up a snapshot; unknown, invalid or unreadable ids yield `None`
    async fn get(&self, id: &str) -> Result<Option<Profile>, StorageError>;
}

/// Ids double as file names, so only `[A-Za-z0-9_-]` is accepted
pub fn is_valid_id(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= 64
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Bounded in-memory snapshot store
///
/// Once `max_profiles` is reached the least valuable entries are evicted,
/// after which lookups for them fall back like any other miss.
pub struct MemoryProfileRepository {
    profiles: moka::future::Cache<String, Profile>,
}

impl MemoryProfileRepository {
    pub fn new(max_profiles: u64) -> Self {
        let profiles = moka::future::CacheBuilder::new(max_profiles).build();
        Self { profiles }
    }
}

#[async_trait]
impl ProfileRepository for MemoryProfileRepository {
    async fn put(&self, id: &str, profile: &Profile) -> Result<(), StorageError> {
        if !is_valid_id(id) {
            return Err(StorageError::InvalidId(id.to_string()));
        }

        self.profiles.insert(id.to_string(), profile.clone()).await;
        tracing::trace!("Stored profile in memory: {}", id);
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<Profile>, StorageError> {
        Ok(self.profiles.get(id).await)
    }
}

/// Directory-backed snapshot store, one JSON document per profile
pub struct FileProfileRepository {
    dir: PathBuf,
}

impl FileProfileRepository {
    /// Open (creating if needed) a snapshot directory
    pub async fn open<P: AsRef<Path>>(dir: P) -> Result<Self, StorageError> {
        let dir = dir.as_ref().to_path_buf();
        tokio::fs::create_dir_all(&dir).await?;
        Ok(Self { dir })
    }

    fn snapshot_path(&self, id: &str) -> PathBuf {
        self.dir.join(format!("student_{}.json", id))
    }
}

#[async_trait]
impl ProfileRepository for FileProfileRepository {
    async fn put(&self, id: &str, profile: &Profile) -> Result<(), StorageError> {
        if !is_valid_id(id) {
            return Err(StorageError::InvalidId(id.to_string()));
        }

        let path = self.snapshot_path(id);
        let tmp_path = path.with_extension("json.tmp");
        let json = serde_json::to_vec_pretty(profile)?;

        // Write then rename so readers never observe a partial snapshot
        tokio::fs::write(&tmp_path, json).await?;
        if let Err(e) = tokio::fs::rename(&tmp_path, &path).await {
            tokio::fs::remove_file(&tmp_path).await.ok();
            return Err(e.into());
        }

        tracing::debug!("Stored profile snapshot: {}", path.display());
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<Profile>, StorageError> {
        if !is_valid_id(id) {
            return Ok(None);
        }

        let path = self.snapshot_path(id);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_slice(&bytes) {
            Ok(profile) => Ok(Some(profile)),
            Err(e) => {
                tracing::warn!("Ignoring malformed profile snapshot {}: {}", path.display(), e);
                Ok(None)
            }
        }
    }
}
