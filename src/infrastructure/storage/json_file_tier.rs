use crate::domain::entities::Enrollment;
use crate::domain::errors::StorageError;
use crate::domain::ports::enrollment_store::{EnrollmentTier, StorageTier};
use async_trait::async_trait;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::RwLock;

type Region = HashMap<String, Vec<Enrollment>>;

/// Durable tier: a single JSON document mapping user ids to enrollment lists.
///
/// The whole region is parsed on every access. A missing file is an empty
/// region; an unparsable one is a fault on both read and write so that a
/// corrupt region is never overwritten.
///
/// Rewrites go to a sibling temp file that is renamed over the region, so
/// readers only ever see a complete document.
pub struct JsonFileTier {
    path: PathBuf,
    // Readers share; a rewrite is exclusive within this process
    region_lock: RwLock<()>,
}

impl JsonFileTier {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            region_lock: RwLock::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "region".to_string());
        self.path.with_file_name(format!(".{}.tmp", name))
    }

    async fn load_region(&self) -> Result<Region, StorageError> {
        let raw = match fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Region::new()),
            Err(e) => return Err(e.into()),
        };

        if raw.iter().all(u8::is_ascii_whitespace) {
            return Ok(Region::new());
        }

        Ok(serde_json::from_slice(&raw)?)
    }
}

#[async_trait]
impl EnrollmentTier for JsonFileTier {
    fn kind(&self) -> StorageTier {
        StorageTier::Durable
    }

    async fn read(&self, user_id: &str) -> Result<Option<Vec<Enrollment>>, StorageError> {
        let _guard = self.region_lock.read().await;

        let mut region = self.load_region().await?;
        Ok(region.remove(user_id))
    }

    async fn write(&self, user_id: &str, enrollments: &[Enrollment]) -> Result<(), StorageError> {
        let _guard = self.region_lock.write().await;

        let mut region = self.load_region().await?;
        region.insert(user_id.to_string(), enrollments.to_vec());

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let body = serde_json::to_vec_pretty(&region)?;
        let temp_path = self.temp_path();
        fs::write(&temp_path, body).await?;
        if let Err(e) = fs::rename(&temp_path, &self.path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(e.into());
        }

        tracing::debug!(
            user_id,
            count = enrollments.len(),
            path = %self.path.display(),
            "Wrote enrollments to durable tier"
        );
        Ok(())
    }
}
