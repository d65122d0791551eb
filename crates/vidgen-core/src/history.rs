//! Capped, newest-first list of generated videos.

use serde::{Deserialize, Deserializer, Serialize};

use crate::record::VideoRecord;
use crate::types::VideoId;

/// Maximum number of records kept in history.
pub const HISTORY_CAPACITY: usize = 20;

/// Recently generated videos, most recent first.
///
/// Never holds more than [`HISTORY_CAPACITY`] records. Serializes as a
/// plain JSON array; a longer stored array keeps only its first entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HistoryList(Vec<VideoRecord>);

impl HistoryList {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a history from records ordered newest first, dropping any
    /// beyond the capacity.
    pub fn from_records(mut records: Vec<VideoRecord>) -> Self {
        records.truncate(HISTORY_CAPACITY);
        Self(records)
    }

    /// Returns a new history with `record` first and the oldest entries
    /// dropped past the capacity. `self` is left untouched.
    pub fn append(&self, record: VideoRecord) -> Self {
        let mut records = Vec::with_capacity(HISTORY_CAPACITY);
        records.push(record);
        records.extend(self.0.iter().take(HISTORY_CAPACITY - 1).cloned());
        Self(records)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no video has been recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The most recent record.
    pub fn latest(&self) -> Option<&VideoRecord> {
        self.0.first()
    }

    /// Find a record by its identifier.
    pub fn get(&self, id: &VideoId) -> Option<&VideoRecord> {
        self.0.iter().find(|record| &record.id == id)
    }

    /// Iterate over records, most recent first.
    pub fn iter(&self) -> std::slice::Iter<'_, VideoRecord> {
        self.0.iter()
    }

    /// Records as a slice, most recent first.
    pub fn as_slice(&self) -> &[VideoRecord] {
        &self.0
    }
}

impl<'de> Deserialize<'de> for HistoryList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let records = Vec::<VideoRecord>::deserialize(deserializer)?;
        Ok(Self::from_records(records))
    }
}

impl<'a> IntoIterator for &'a HistoryList {
    type Item = &'a VideoRecord;
    type IntoIter = std::slice::Iter<'a, VideoRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for HistoryList {
    type Item = VideoRecord;
    type IntoIter = std::vec::IntoIter<VideoRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::{GenerationRequest, GenerationResponse};
    use crate::types::{Prompt, Style, VideoDuration};
    use chrono::Utc;

    fn record(title: &str) -> VideoRecord {
        let request = GenerationRequest::new(
            Prompt::new(title).unwrap(),
            Style::Trending,
            VideoDuration::Short,
        );
        VideoRecord::completed(&request, &GenerationResponse::default(), Utc::now())
    }

    #[test]
    fn append_prepends() {
        let history = HistoryList::new()
            .append(record("first"))
            .append(record("second"));
        let titles: Vec<_> = history.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["second", "first"]);
        assert_eq!(history.latest().unwrap().title, "second");
    }

    #[test]
    fn append_leaves_original_untouched() {
        let empty = HistoryList::new();
        let one = empty.append(record("only"));
        assert!(empty.is_empty());
        assert_eq!(one.len(), 1);
    }

    #[test]
    fn length_is_min_of_appends_and_capacity() {
        let mut history = HistoryList::new();
        for n in 1..=45 {
            history = history.append(record(&format!("video {}", n)));
            assert_eq!(history.len(), n.min(HISTORY_CAPACITY));
        }
        assert_eq!(history.latest().unwrap().title, "video 45");
        assert_eq!(history.as_slice().last().unwrap().title, "video 26");
    }

    #[test]
    fn ordered_most_recent_first() {
        let mut history = HistoryList::new();
        for n in 0..30 {
            history = history.append(record(&format!("video {}", n)));
        }
        let expected: Vec<_> = (10..30).rev().map(|n| format!("video {}", n)).collect();
        let titles: Vec<_> = history.iter().map(|r| r.title.clone()).collect();
        assert_eq!(titles, expected);

        let created: Vec<_> = history.iter().map(|r| r.created_at).collect();
        assert!(created.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn get_finds_by_id() {
        let target = record("target");
        let id = target.id.clone();
        let history = HistoryList::new().append(target).append(record("other"));
        assert_eq!(history.get(&id).unwrap().title, "target");
        assert!(history.get(&VideoId::from_string("video_0")).is_none());
    }

    #[test]
    fn deserialize_truncates_oversized_arrays() {
        let records: Vec<_> = (0..25).map(|n| record(&format!("video {}", n))).collect();
        let json = serde_json::to_string(&records).unwrap();
        let history: HistoryList = serde_json::from_str(&json).unwrap();
        assert_eq!(history.len(), HISTORY_CAPACITY);
        assert_eq!(history.latest().unwrap().title, "video 0");
    }

    #[test]
    fn serializes_as_array() {
        let history = HistoryList::new().append(record("one"));
        let value = serde_json::to_value(&history).unwrap();
        assert!(value.is_array());
        assert_eq!(value.as_array().unwrap().len(), 1);
    }
}
