//! HTTP-backed generation service.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderValue};
use serde_json::Value;
use tracing::{debug, instrument, trace};

use vidgen_core::Result;
use vidgen_core::error::{BackendError, Error, TransportError};
use vidgen_core::generation::{GenerationRequest, GenerationResponse};
use vidgen_core::traits::GenerationBackend;
use vidgen_core::types::EndpointUrl;

/// Error body some generation services return alongside a failure status.
#[derive(Debug, serde::Deserialize)]
struct ErrorResponse {
    error: Option<String>,
    message: Option<String>,
}

fn map_reqwest(err: reqwest::Error) -> Error {
    let transport = if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    };
    BackendError::transport(transport).into()
}

/// A generation backend that POSTs JSON to an HTTP endpoint.
///
/// Each call sends one request with no retries. No timeout is set here;
/// pass a configured client to [`HttpBackend::with_client`] to add one.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    endpoint: EndpointUrl,
    client: reqwest::Client,
}

impl HttpBackend {
    /// Create a backend for the given endpoint.
    pub fn new(endpoint: EndpointUrl) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("vidgen/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(map_reqwest)?;

        Ok(Self::with_client(endpoint, client))
    }

    /// Create a backend using an existing HTTP client.
    pub fn with_client(endpoint: EndpointUrl, client: reqwest::Client) -> Self {
        Self { endpoint, client }
    }

    /// Returns the endpoint URL requests are sent to.
    pub fn endpoint(&self) -> &EndpointUrl {
        &self.endpoint
    }

    /// Turn an HTTP response into scene content or a backend error.
    async fn handle_response(&self, response: reqwest::Response) -> Result<GenerationResponse> {
        let status = response.status();
        trace!(status = %status, "generation response");

        if !status.is_success() {
            return Err(Self::parse_error_response(response).await.into());
        }

        let bytes = response.bytes().await.map_err(map_reqwest)?;
        let body: Value = serde_json::from_slice(&bytes)
            .map_err(|e| BackendError::invalid_body(e.to_string()))?;

        Ok(GenerationResponse::from_json(&body))
    }

    /// Build a backend error from a non-success response.
    async fn parse_error_response(response: reqwest::Response) -> BackendError {
        let status = response.status();
        let reason = status.canonical_reason().map(str::to_string);

        let message = match response.json::<ErrorResponse>().await {
            Ok(body) => body.message.or(body.error),
            Err(_) => None,
        };

        BackendError::status(status.as_u16(), reason, message)
    }
}

#[async_trait]
impl GenerationBackend for HttpBackend {
    fn describe(&self) -> String {
        self.endpoint.to_string()
    }

    #[instrument(skip(self, request), fields(endpoint = %self.endpoint))]
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResponse> {
        debug!(style = %request.style, duration = %request.duration, "POST generation request");

        let response = self
            .client
            .post(self.endpoint.as_url().clone())
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .json(request)
            .send()
            .await
            .map_err(map_reqwest)?;

        self.handle_response(response).await
    }
}
