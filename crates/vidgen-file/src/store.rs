//! Filesystem storage slots.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use fs2::FileExt;
use tracing::{debug, instrument};

use vidgen_core::Result;
use vidgen_core::error::{Error, StorageError};
use vidgen_core::traits::{KeyValueStore, validate_key};

fn map_io(key: &str, err: std::io::Error) -> Error {
    Error::Storage(StorageError::Io {
        key: key.to_string(),
        message: err.to_string(),
    })
}

/// Durable key-value slots stored as files under a root directory.
///
/// Each key maps to `<root>/<key>.json`. Writes go to a temporary file that
/// is renamed over the slot, under an exclusive lock on `<root>/.lock`, so a
/// reader sees either the old value or the new one.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a new file store at the given root directory.
    ///
    /// The directory is created on first write.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Get the root directory path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the path of the file backing a slot.
    pub fn slot_path(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.root.join(format!("{}.json", key)))
    }

    /// Get the lock file path.
    fn lock_path(&self) -> PathBuf {
        self.root.join(".lock")
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    #[instrument(skip(self), fields(root = %self.root.display()))]
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key)?;

        match fs::read_to_string(&path) {
            Ok(content) => {
                debug!(bytes = content.len(), "read slot");
                Ok(Some(content))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(map_io(key, e)),
        }
    }

    #[instrument(skip(self, value), fields(root = %self.root.display(), bytes = value.len()))]
    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.slot_path(key)?;

        fs::create_dir_all(&self.root).map_err(|e| map_io(key, e))?;

        let lock_file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(self.lock_path())
            .map_err(|e| map_io(key, e))?;

        lock_file.lock_exclusive().map_err(|e| map_io(key, e))?;

        let temp_path = path.with_extension("tmp");
        let written = (|| {
            let mut file = fs::File::create(&temp_path)?;
            file.write_all(value.as_bytes())?;
            file.sync_data()?;
            fs::rename(&temp_path, &path)
        })();

        if written.is_err() {
            let _ = fs::remove_file(&temp_path);
        }

        lock_file.unlock().map_err(|e| map_io(key, e))?;
        written.map_err(|e| map_io(key, e))?;

        debug!(path = %path.display(), "wrote slot");

        Ok(())
    }
}
