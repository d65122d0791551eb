//! Generation request and response types.

use serde::Serialize;
use serde_json::Value;

use crate::types::{Prompt, Style, VideoDuration};

/// Number of scenes in the placeholder captions and images.
pub const PLACEHOLDER_SCENES: usize = 5;

/// Image shown for every scene when the backend returns no images.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/540x960?text=Scene";

/// Captions used when the backend returns none.
pub fn placeholder_captions() -> Vec<String> {
    (1..=PLACEHOLDER_SCENES)
        .map(|scene| format!("Scene {}", scene))
        .collect()
}

/// Images used when the backend returns none.
pub fn placeholder_images() -> Vec<String> {
    vec![PLACEHOLDER_IMAGE_URL.to_string(); PLACEHOLDER_SCENES]
}

/// A validated request for one generated video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    /// The user's video idea.
    #[serde(rename = "videoIdea")]
    pub prompt: Prompt,

    /// Requested style.
    pub style: Style,

    /// Requested length, sent as seconds.
    pub duration: VideoDuration,
}

impl GenerationRequest {
    /// Create a new request.
    pub fn new(prompt: Prompt, style: Style, duration: VideoDuration) -> Self {
        Self {
            prompt,
            style,
            duration,
        }
    }
}

/// The scene content returned by a generation backend.
///
/// `None` means the backend did not provide a usable value for the field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationResponse {
    pub captions: Option<Vec<String>>,
    pub images: Option<Vec<String>>,
}

impl GenerationResponse {
    /// Read a decoded response body leniently.
    ///
    /// Arrays are taken as they are: string elements are kept and anything
    /// else is rendered as its JSON text. A field that is missing, `null`,
    /// not an array or an empty array counts as absent. A body that is not
    /// an object has neither field.
    pub fn from_json(body: &Value) -> Self {
        Self {
            captions: string_list(body.get("captions")),
            images: string_list(body.get("images")),
        }
    }

    /// Captions, or the placeholder sequence if absent.
    pub fn captions_or_placeholder(&self) -> Vec<String> {
        self.captions.clone().unwrap_or_else(placeholder_captions)
    }

    /// Images, or the placeholder sequence if absent.
    pub fn images_or_placeholder(&self) -> Vec<String> {
        self.images.clone().unwrap_or_else(placeholder_images)
    }
}

fn string_list(value: Option<&Value>) -> Option<Vec<String>> {
    let items = value?.as_array()?;
    if items.is_empty() {
        return None;
    }
    Some(
        items
            .iter()
            .map(|item| match item {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect(),
    )
}
