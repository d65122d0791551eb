//! Generation request and response types.
//!
//! The call itself is made by a [`GenerationBackend`](crate::GenerationBackend);
//! [`GenerationClient`](crate::GenerationClient) turns its answer into a
//! [`VideoRecord`](crate::VideoRecord).

mod types;

pub use types::{
    GenerationRequest, GenerationResponse, PLACEHOLDER_IMAGE_URL, PLACEHOLDER_SCENES,
    placeholder_captions, placeholder_images,
};
