//! Video style type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// The visual and narrative style requested for a video.
///
/// Serialized as its capitalized name (`"Cinematic"`), which is also the
/// value sent to the generation backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Style {
    #[default]
    Trending,
    Educational,
    Motivational,
    Entertaining,
    Cinematic,
    Minimalist,
}

impl Style {
    /// All styles, in display order.
    pub const ALL: [Style; 6] = [
        Style::Trending,
        Style::Educational,
        Style::Motivational,
        Style::Entertaining,
        Style::Cinematic,
        Style::Minimalist,
    ];

    /// Returns the style name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Trending => "Trending",
            Style::Educational => "Educational",
            Style::Motivational => "Motivational",
            Style::Entertaining => "Entertaining",
            Style::Cinematic => "Cinematic",
            Style::Minimalist => "Minimalist",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Style {
    type Err = Error;

    /// Parses a style name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Style::ALL
            .into_iter()
            .find(|style| style.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| {
                InvalidInputError::Style {
                    value: s.to_string(),
                    expected: Style::ALL.map(|style| style.as_str()).join(", "),
                }
                .into()
            })
    }
}
