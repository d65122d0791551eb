//! Durable key-value storage trait.

use async_trait::async_trait;

use crate::Result;
use crate::error::InvalidInputError;

/// A durable key-value slot store that outlives the process.
///
/// Values are opaque strings; callers own serialization.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, or `None` if the slot is empty.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the value stored under `key`.
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Check that a key is usable by every store: non-empty ASCII letters,
/// digits, `-` and `_`.
pub fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(InvalidInputError::StorageKey {
            value: key.to_string(),
            reason: "must be non-empty".to_string(),
        }
        .into());
    }

    if !key
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(InvalidInputError::StorageKey {
            value: key.to_string(),
            reason: "must contain only ASCII letters, digits, '-' and '_'".to_string(),
        }
        .into());
    }

    Ok(())
}
