//! Generation backend trait.

use async_trait::async_trait;

use crate::Result;
use crate::generation::{GenerationRequest, GenerationResponse};

/// A service that turns a request into scene captions and images.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Short description of where requests go, for logs.
    fn describe(&self) -> String;

    /// Issue exactly one request and await its answer.
    ///
    /// Implementations must not retry. A non-success status or a failed
    /// connection is returned as [`Error::Backend`](crate::Error::Backend).
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResponse>;
}
