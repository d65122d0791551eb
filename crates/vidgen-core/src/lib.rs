//! vidgen-core - Core types, history store and generation state machine.
//!
//! The pieces, leaves first:
//!
//! - [`types`]: validated inputs such as [`Style`] and [`VideoDuration`].
//! - [`GenerationClient`]: one backend call per request, normalized into a
//!   [`VideoRecord`].
//! - [`HistoryStore`]: the capped [`HistoryList`] kept in a
//!   [`KeyValueStore`] slot.
//! - [`Studio`]: the session state machine tying them together.

pub mod client;
pub mod error;
pub mod generation;
pub mod history;
pub mod memory;
pub mod record;
pub mod store;
pub mod studio;
pub mod traits;
pub mod types;

pub use client::GenerationClient;
pub use error::{BackendError, Error, InvalidInputError, StorageError, TransportError};
pub use generation::{GenerationRequest, GenerationResponse};
pub use history::{HISTORY_CAPACITY, HistoryList};
pub use memory::MemoryStore;
pub use record::{VideoRecord, VideoStatus};
pub use store::{HISTORY_KEY, HistoryStore};
pub use studio::{Notice, NoticeKind, Phase, Studio, StudioState};
pub use traits::{GenerationBackend, KeyValueStore};
pub use types::{EndpointUrl, Prompt, Style, VideoDuration, VideoId};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
