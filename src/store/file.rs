//! Directory-backed store.
//!
//! Each key maps to one file named after the key inside the store
//! directory. Writes go to a sibling `.tmp` file first and are renamed into
//! place, so a reader never observes a half-written value.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::instrument;

use super::KeyValueStore;
use crate::{PlauditError, Result};

/// File-per-key [`KeyValueStore`] rooted at a directory.
///
/// The directory is created lazily on first write.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Root directory of the store.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path for `key`, rejecting keys that could escape the directory.
    fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        if !valid {
            return Err(PlauditError::InvalidInput(format!(
                "store key '{key}' must be non-empty ASCII alphanumerics, '-', '_' or '.'"
            )));
        }
        Ok(self.dir.join(key))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    #[instrument(level = "trace", skip(self), fields(dir = %self.dir.display()))]
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    #[instrument(level = "trace", skip(self, value), fields(dir = %self.dir.display(), value_len = value.len()))]
    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir).await?;

        let tmp = self.dir.join(format!("{key}.tmp"));
        fs::write(&tmp, value).await?;
        fs::rename(&tmp, &path).await?;
        Ok(())
    }

    #[instrument(level = "trace", skip(self), fields(dir = %self.dir.display()))]
    async fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
