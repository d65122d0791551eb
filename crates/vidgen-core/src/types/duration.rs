//! Video duration type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// One of the supported video lengths.
///
/// Serialized as the number of seconds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum VideoDuration {
    #[default]
    Short,
    Medium,
    Long,
}

impl VideoDuration {
    /// All durations, shortest first.
    pub const ALL: [VideoDuration; 3] = [
        VideoDuration::Short,
        VideoDuration::Medium,
        VideoDuration::Long,
    ];

    /// Returns the length in seconds.
    pub fn seconds(&self) -> u32 {
        match self {
            VideoDuration::Short => 15,
            VideoDuration::Medium => 30,
            VideoDuration::Long => 60,
        }
    }

    /// Returns the duration for a number of seconds, if supported.
    pub fn from_seconds(seconds: u32) -> Option<Self> {
        VideoDuration::ALL
            .into_iter()
            .find(|duration| duration.seconds() == seconds)
    }
}

impl fmt::Display for VideoDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.seconds())
    }
}

impl TryFrom<u32> for VideoDuration {
    type Error = Error;

    fn try_from(seconds: u32) -> Result<Self, Self::Error> {
        VideoDuration::from_seconds(seconds).ok_or_else(|| {
            InvalidInputError::Duration {
                value: seconds.to_string(),
            }
            .into()
        })
    }
}

impl From<VideoDuration> for u32 {
    fn from(duration: VideoDuration) -> Self {
        duration.seconds()
    }
}

impl FromStr for VideoDuration {
    type Err = Error;

    /// Parses `"30"` or `"30s"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_suffix('s').unwrap_or(trimmed);
        digits
            .parse::<u32>()
            .ok()
            .and_then(VideoDuration::from_seconds)
            .ok_or_else(|| {
                InvalidInputError::Duration {
                    value: s.to_string(),
                }
                .into()
            })
    }
}
