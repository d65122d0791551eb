//! Durable video history.

use tracing::{debug, instrument, warn};

use crate::Result;
use crate::error::StorageError;
use crate::history::HistoryList;
use crate::record::VideoRecord;
use crate::traits::KeyValueStore;

/// Storage slot holding the serialized history.
pub const HISTORY_KEY: &str = "videoHistory";

/// Loads and saves the [`HistoryList`] through a [`KeyValueStore`].
#[derive(Debug, Clone)]
pub struct HistoryStore<S> {
    storage: S,
}

impl<S: KeyValueStore> HistoryStore<S> {
    /// Create a history store over the given storage.
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Returns the underlying storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Read the stored history.
    ///
    /// An empty slot gives an empty history. So does a slot that cannot be
    /// read or parsed; the failure is logged and not returned.
    #[instrument(skip(self))]
    pub async fn load(&self) -> HistoryList {
        match self.try_load().await {
            Ok(history) => {
                debug!(count = history.len(), "loaded video history");
                history
            }
            Err(e) => {
                warn!(error = %e, "discarding unreadable video history");
                HistoryList::new()
            }
        }
    }

    /// Read the stored history, returning storage and parse failures.
    pub async fn try_load(&self) -> Result<HistoryList> {
        let Some(raw) = self.storage.get(HISTORY_KEY).await? else {
            return Ok(HistoryList::new());
        };

        let history = serde_json::from_str(&raw).map_err(|e| StorageError::Parse {
            key: HISTORY_KEY.to_string(),
            message: e.to_string(),
        })?;

        Ok(history)
    }

    /// Returns `list` with `record` prepended and truncated to capacity.
    pub fn append(list: &HistoryList, record: VideoRecord) -> HistoryList {
        list.append(record)
    }

    /// Overwrite the stored history with `list`.
    #[instrument(skip(self, list), fields(count = list.len()))]
    pub async fn persist(&self, list: &HistoryList) -> Result<()> {
        let raw = serde_json::to_string(list).map_err(|e| StorageError::Serialize {
            key: HISTORY_KEY.to_string(),
            message: e.to_string(),
        })?;

        self.storage.set(HISTORY_KEY, &raw).await?;

        debug!("persisted video history");
        Ok(())
    }
}
