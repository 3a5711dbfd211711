//! Remote advisory client.
//!
//! Issues a single POST to a Gemini-style generateContent endpoint and
//! extracts the candidate text. No retry at this layer: any failure
//! hands control to the offline safeguard, so errors here are cheap to
//! produce and fully recoverable.
//!
//! Supports a real HTTP implementation and a fake client for tests.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::AdvisoryConfig;

/// Token the generation prompt requires the reply to start with
pub const RESPONSE_TOKEN: &str = "INSTRUCTIONAL_PROTOCOL:";

/// Build the generation prompt for a user query.
///
/// The formatting contract keeps replies usable on a phone screen in a
/// collapsed building: at most five steps, one emoji each, no preamble.
pub fn build_prompt(query: &str) -> String {
    format!(
        "You are a disaster-response medic guiding an untrained survivor. \
         Emergency: \"{query}\". \
         Reply with a short first-aid protocol: at most 5 bullet steps, \
         each step prefixed with a single emoji, plain language, no preamble. \
         Your reply must begin with the token {RESPONSE_TOKEN}"
    )
}

/// Uplink errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum RemoteError {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("request timeout after {0} seconds")]
    Timeout(u64),

    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    #[error("response carried no candidate text")]
    MissingCandidate,

    #[error("remote returned an empty protocol")]
    EmptyResponse,
}

/// Boundary trait for the advisory uplink
#[async_trait]
pub trait AdvisoryClient: Send + Sync {
    /// Fetch a generated protocol for the raw user query
    async fn fetch_protocol(&self, query: &str) -> Result<String, RemoteError>;
}

#[async_trait]
impl<T: AdvisoryClient + ?Sized> AdvisoryClient for std::sync::Arc<T> {
    async fn fetch_protocol(&self, query: &str) -> Result<String, RemoteError> {
        (**self).fetch_protocol(query).await
    }
}

/// Request body for :generateContent
#[derive(Debug, Clone, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

/// Response from :generateContent
#[derive(Debug, Clone, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GenerateResponse {
    /// Pull the first candidate's text, trimmed
    fn candidate_text(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|c| c.parts.first())
            .map(|p| p.text.trim())
    }
}

/// Real uplink implementation over HTTP
pub struct HttpAdvisoryClient {
    config: AdvisoryConfig,
    client: reqwest::Client,
}

impl HttpAdvisoryClient {
    pub fn new(config: AdvisoryConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;

        Ok(Self { config, client })
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.endpoint.trim_end_matches('/'),
            self.config.model
        )
    }
}

#[async_trait]
impl AdvisoryClient for HttpAdvisoryClient {
    async fn fetch_protocol(&self, query: &str) -> Result<String, RemoteError> {
        let request_body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: build_prompt(query),
                }],
            }],
        };

        let mut request = self.client.post(self.generate_url()).json(&request_body);

        // Credential travels as a header, never in the URL
        if let Some(api_key) = &self.config.api_key {
            request = request.header("x-goog-api-key", api_key);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                RemoteError::Timeout(self.config.timeout_secs)
            } else {
                RemoteError::Http(format!("Request failed: {}", e))
            }
        })?;

        if !response.status().is_success() {
            return Err(RemoteError::Http(format!(
                "HTTP {} from generation endpoint",
                response.status()
            )));
        }

        let payload: GenerateResponse = response
            .json()
            .await
            .map_err(|e| RemoteError::MalformedPayload(format!("Failed to parse response: {}", e)))?;

        let text = payload.candidate_text().ok_or(RemoteError::MissingCandidate)?;

        if text.is_empty() {
            return Err(RemoteError::EmptyResponse);
        }

        Ok(text.to_string())
    }
}

/// Fake uplink for testing
pub struct FakeAdvisoryClient {
    responses: std::sync::Mutex<Vec<Result<String, RemoteError>>>,
    call_count: std::sync::Mutex<usize>,
}

impl FakeAdvisoryClient {
    /// Create a fake client with pre-defined responses
    pub fn new(responses: Vec<Result<String, RemoteError>>) -> Self {
        Self {
            responses: std::sync::Mutex::new(responses),
            call_count: std::sync::Mutex::new(0),
        }
    }

    /// Create a fake client that always returns the given text
    pub fn always_text(text: impl Into<String>) -> Self {
        Self::new(vec![Ok(text.into())])
    }

    /// Create a fake client that always returns an error
    pub fn always_error(error: RemoteError) -> Self {
        Self::new(vec![Err(error)])
    }

    /// Get the number of calls made
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

#[async_trait]
impl AdvisoryClient for FakeAdvisoryClient {
    async fn fetch_protocol(&self, _query: &str) -> Result<String, RemoteError> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(RemoteError::EmptyResponse);
        }

        if responses.len() == 1 {
            // Keep returning the same response
            responses[0].clone()
        } else {
            responses.remove(0)
        }
    }
}
