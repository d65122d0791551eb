//! Core vidgen types.
//!
//! These types enforce their invariants at construction time,
//! so an invalid style, duration or prompt cannot reach the backend.

mod duration;
mod endpoint_url;
mod prompt;
mod style;
mod video_id;

pub use duration::VideoDuration;
pub use endpoint_url::EndpointUrl;
pub use prompt::{Prompt, TITLE_MAX_CHARS};
pub use style::Style;
pub use video_id::VideoId;
