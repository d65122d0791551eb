//! Video prompt type.

use serde::Serialize;
use std::fmt;

use crate::error::{Error, InvalidInputError};

/// Maximum number of characters of the prompt kept as a record title.
pub const TITLE_MAX_CHARS: usize = 50;

/// A video idea that is non-empty after trimming whitespace.
///
/// The text is kept exactly as entered; trimming only decides validity.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct Prompt(String);

impl Prompt {
    /// Create a new prompt.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError::EmptyPrompt`] if the text is empty or
    /// whitespace only.
    pub fn new(s: impl Into<String>) -> Result<Self, Error> {
        let s = s.into();
        if s.trim().is_empty() {
            return Err(InvalidInputError::EmptyPrompt.into());
        }
        Ok(Self(s))
    }

    /// Returns the prompt text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the first [`TITLE_MAX_CHARS`] characters, for display.
    pub fn title(&self) -> String {
        self.0.chars().take(TITLE_MAX_CHARS).collect()
    }
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Prompt> for String {
    fn from(prompt: Prompt) -> Self {
        prompt.0
    }
}

impl AsRef<str> for Prompt {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_whitespace() {
        assert!(Prompt::new("").unwrap_err().is_empty_prompt());
        assert!(Prompt::new("  \t\n ").unwrap_err().is_empty_prompt());
    }

    #[test]
    fn keeps_text_untrimmed() {
        let prompt = Prompt::new("  A cat astronaut ").unwrap();
        assert_eq!(prompt.as_str(), "  A cat astronaut ");
    }

    #[test]
    fn title_is_short_prompt_unchanged() {
        let prompt = Prompt::new("A cat astronaut").unwrap();
        assert_eq!(prompt.title(), "A cat astronaut");
    }

    #[test]
    fn title_truncates_to_fifty_chars() {
        let prompt = Prompt::new("x".repeat(80)).unwrap();
        assert_eq!(prompt.title().chars().count(), TITLE_MAX_CHARS);
    }

    #[test]
    fn title_truncates_on_char_boundaries() {
        let prompt = Prompt::new("é".repeat(60)).unwrap();
        assert_eq!(prompt.title(), "é".repeat(50));
    }
}
