//! Generated video records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::generation::{GenerationRequest, GenerationResponse};
use crate::types::{Style, VideoDuration, VideoId};

/// Lifecycle status of a stored video. Only finished videos are recorded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoStatus {
    #[default]
    Completed,
}

/// The normalized result of one successful generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoRecord {
    pub id: VideoId,

    /// At most the first 50 characters of the prompt.
    pub title: String,

    /// One caption per scene.
    pub captions: Vec<String>,

    /// One image URL per scene.
    pub images: Vec<String>,

    #[serde(rename = "duration")]
    pub duration_seconds: VideoDuration,

    pub style: Style,

    pub created_at: DateTime<Utc>,

    pub status: VideoStatus,
}

impl VideoRecord {
    /// Build a completed record from a request and the backend's answer.
    ///
    /// Missing captions or images are replaced by the placeholder scenes.
    pub fn completed(
        request: &GenerationRequest,
        response: &GenerationResponse,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: VideoId::generate(now),
            title: request.prompt.title(),
            captions: response.captions_or_placeholder(),
            images: response.images_or_placeholder(),
            duration_seconds: request.duration,
            style: request.style,
            created_at: now,
            status: VideoStatus::Completed,
        }
    }

    /// Image shown as the preview, the first scene's.
    pub fn preview_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Caption and image pairs, one per scene.
    ///
    /// A scene without a matching caption or image is paired with `None`.
    pub fn scenes(&self) -> impl Iterator<Item = (Option<&str>, Option<&str>)> {
        let count = self.captions.len().max(self.images.len());
        (0..count).map(move |i| {
            (
                self.captions.get(i).map(String::as_str),
                self.images.get(i).map(String::as_str),
            )
        })
    }
}
