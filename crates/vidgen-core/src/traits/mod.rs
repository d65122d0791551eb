//! Core traits for the generation backend and durable storage.

mod generation;
mod storage;

pub use generation::GenerationBackend;
pub use storage::{KeyValueStore, validate_key};
