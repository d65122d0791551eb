//! Generation client.

use chrono::Utc;
use tracing::{debug, instrument};

use crate::Result;
use crate::generation::GenerationRequest;
use crate::record::VideoRecord;
use crate::traits::GenerationBackend;
use crate::types::{Prompt, Style, VideoDuration};

/// Turns a user request into one backend call and a normalized record.
#[derive(Debug, Clone)]
pub struct GenerationClient<B> {
    backend: B,
}

impl<B: GenerationBackend> GenerationClient<B> {
    /// Create a client over the given backend.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Returns the backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Generate a video from raw user input.
    ///
    /// An empty or whitespace-only prompt fails with
    /// [`InvalidInputError::EmptyPrompt`](crate::InvalidInputError::EmptyPrompt)
    /// before the backend is contacted.
    pub async fn generate(
        &self,
        prompt: &str,
        style: Style,
        duration: VideoDuration,
    ) -> Result<VideoRecord> {
        let prompt = Prompt::new(prompt)?;
        self.generate_request(&GenerationRequest::new(prompt, style, duration))
            .await
    }

    /// Generate a video from an already validated request.
    #[instrument(
        skip(self, request),
        fields(
            backend = %self.backend.describe(),
            style = %request.style,
            duration = %request.duration
        )
    )]
    pub async fn generate_request(&self, request: &GenerationRequest) -> Result<VideoRecord> {
        debug!("requesting video");

        let response = self.backend.generate(request).await?;
        let record = VideoRecord::completed(request, &response, Utc::now());

        debug!(
            id = %record.id,
            scenes = record.captions.len(),
            placeholder_captions = response.captions.is_none(),
            placeholder_images = response.images.is_none(),
            "video generated"
        );

        Ok(record)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::error::{BackendError, Error};
    use crate::generation::GenerationResponse;
    use crate::record::VideoStatus;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Backend that replays a fixed answer and records every request.
    #[derive(Debug, Default)]
    pub(crate) struct ScriptedBackend {
        pub(crate) fail_with_status: Option<u16>,
        pub(crate) response: GenerationResponse,
        pub(crate) calls: AtomicUsize,
        pub(crate) requests: Mutex<Vec<GenerationRequest>>,
    }

    impl ScriptedBackend {
        pub(crate) fn answering(response: GenerationResponse) -> Self {
            Self {
                response,
                ..Self::default()
            }
        }

        pub(crate) fn failing(status: u16) -> Self {
            Self {
                fail_with_status: Some(status),
                ..Self::default()
            }
        }

        pub(crate) fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl GenerationBackend for ScriptedBackend {
        fn describe(&self) -> String {
            "scripted".to_string()
        }

        async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.requests.lock().unwrap().push(request.clone());
            match self.fail_with_status {
                Some(status) => Err(BackendError::status(
                    status,
                    Some("Internal Server Error".to_string()),
                    None,
                )
                .into()),
                None => Ok(self.response.clone()),
            }
        }
    }

    #[tokio::test]
    async fn empty_prompts_never_reach_backend() {
        let client = GenerationClient::new(ScriptedBackend::default());
        for prompt in ["", " ", "\n\t  "] {
            let err = client
                .generate(prompt, Style::Trending, VideoDuration::Short)
                .await
                .unwrap_err();
            assert!(err.is_empty_prompt());
        }
        assert_eq!(client.backend().calls(), 0);
    }

    #[tokio::test]
    async fn cat_astronaut_scenario() {
        let client = GenerationClient::new(ScriptedBackend::answering(GenerationResponse {
            captions: Some(vec!["S1".to_string()]),
            images: Some(vec!["http://x/img1".to_string()]),
        }));

        let record = client
            .generate("A cat astronaut", Style::Cinematic, VideoDuration::Medium)
            .await
            .unwrap();

        assert_eq!(record.title, "A cat astronaut");
        assert_eq!(record.captions, vec!["S1"]);
        assert_eq!(record.images, vec!["http://x/img1"]);
        assert_eq!(record.style, Style::Cinematic);
        assert_eq!(record.duration_seconds.seconds(), 30);
        assert_eq!(record.status, VideoStatus::Completed);
        assert_eq!(client.backend().calls(), 1);

        let requests = client.backend().requests.lock().unwrap();
        assert_eq!(requests[0].prompt.as_str(), "A cat astronaut");
    }

    #[tokio::test]
    async fn backend_failure_produces_no_record() {
        let client = GenerationClient::new(ScriptedBackend::failing(500));
        let err = client
            .generate("A cat astronaut", Style::Cinematic, VideoDuration::Medium)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Backend(BackendError {
                status: Some(500),
                ..
            })
        ));
        assert_eq!(client.backend().calls(), 1);
    }

    #[tokio::test]
    async fn records_get_distinct_ids() {
        let client = GenerationClient::new(ScriptedBackend::default());
        let a = client
            .generate("one", Style::Trending, VideoDuration::Short)
            .await
            .unwrap();
        let b = client
            .generate("two", Style::Trending, VideoDuration::Short)
            .await
            .unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(a.captions.len(), 5);
    }
}
