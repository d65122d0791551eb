//! Video record identifier.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Utc};

/// Last millisecond value handed out by [`VideoId::generate`].
static LAST_ISSUED_MILLIS: AtomicI64 = AtomicI64::new(0);

/// Identifier of a generated video, of the form `video_<unix millis>`.
///
/// Stored identifiers are accepted as opaque strings.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    /// Generate a fresh identifier derived from `now`.
    ///
    /// Identifiers are strictly increasing within a process, so two records
    /// created in the same millisecond never share one.
    pub fn generate(now: DateTime<Utc>) -> Self {
        let wanted = now.timestamp_millis();
        let mut last = LAST_ISSUED_MILLIS.load(Ordering::Relaxed);
        loop {
            let next = wanted.max(last + 1);
            match LAST_ISSUED_MILLIS.compare_exchange_weak(
                last,
                next,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => return Self(format!("video_{}", next)),
                Err(current) => last = current,
            }
        }
    }

    /// Wrap an existing identifier.
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Returns the identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VideoId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn has_video_prefix() {
        let id = VideoId::generate(Utc::now());
        assert!(id.as_str().starts_with("video_"));
        assert!(id.as_str()["video_".len()..].parse::<i64>().is_ok());
    }

    #[test]
    fn never_reused_for_same_instant() {
        let now = Utc::now();
        let ids: HashSet<_> = (0..100).map(|_| VideoId::generate(now)).collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn serializes_transparently() {
        let id = VideoId::from_string("video_1700000000000");
        assert_eq!(
            serde_json::to_string(&id).unwrap(),
            "\"video_1700000000000\""
        );
    }
}
