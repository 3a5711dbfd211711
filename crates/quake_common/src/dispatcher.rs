//! Hybrid advisory dispatcher.
//!
//! One state machine per call: ATTEMPT_REMOTE, then CLASSIFY and
//! OFFLINE_RESULT on any uplink failure. Total over all inputs - every
//! query ends in exactly one result, tagged with its origin so the
//! survivor can see whether guidance came from the cloud or the local
//! safeguard.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::catalog::{protocol, render};
use crate::classifier::classify;
use crate::config::AdvisoryConfig;
use crate::remote::{AdvisoryClient, HttpAdvisoryClient};

/// Marker prefixed to cloud-sourced results
pub const REMOTE_MARKER: &str = "\u{1f6f0} UPLINK_TRIAGE // CLOUD_SYNTHESIS";

/// Marker prefixed to offline-safeguard results
pub const OFFLINE_MARKER: &str = "\u{1f6e1} OFFLINE_SAFEGUARD // LOCAL_PROTOCOL";

/// Where a result came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    Remote,
    Offline,
}

/// Outcome of one advisory query, never absent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchResult {
    pub origin: Origin,
    pub text: String,
}

/// Stateless dispatcher, freely shareable across concurrent queries
pub struct AdvisoryDispatcher {
    client: Box<dyn AdvisoryClient>,
    offline_delay: Duration,
}

impl AdvisoryDispatcher {
    pub fn new(client: Box<dyn AdvisoryClient>, offline_delay: Duration) -> Self {
        Self {
            client,
            offline_delay,
        }
    }

    /// Build a dispatcher with the real HTTP uplink from configuration
    pub fn from_config(config: &AdvisoryConfig) -> anyhow::Result<Self> {
        let client = HttpAdvisoryClient::new(config.clone())?;
        Ok(Self::new(Box::new(client), config.offline_delay()))
    }

    /// Answer one emergency query.
    ///
    /// Tries the uplink once; any failure engages the offline safeguard.
    /// Once fallen back, a call never re-enters the remote attempt.
    pub async fn handle(&self, query: &str) -> DispatchResult {
        match self.client.fetch_protocol(query).await {
            Ok(text) => {
                tracing::debug!("uplink answered ({} chars)", text.len());
                DispatchResult {
                    origin: Origin::Remote,
                    text: format!("{REMOTE_MARKER}\n{text}"),
                }
            }
            Err(err) => {
                tracing::debug!("uplink failed, engaging offline safeguard: {err}");
                let category = classify(query);
                let block = render(protocol(category));

                // Fixed processing window on the local path
                tokio::time::sleep(self.offline_delay).await;

                DispatchResult {
                    origin: Origin::Offline,
                    text: format!("{OFFLINE_MARKER}\n{block}"),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::{FakeAdvisoryClient, RemoteError};

    fn offline_dispatcher() -> AdvisoryDispatcher {
        AdvisoryDispatcher::new(
            Box::new(FakeAdvisoryClient::always_error(RemoteError::Http(
                "connection refused".to_string(),
            ))),
            Duration::from_millis(0),
        )
    }

    #[tokio::test]
    async fn test_remote_success_wraps_payload_verbatim() {
        let dispatcher = AdvisoryDispatcher::new(
            Box::new(FakeAdvisoryClient::always_text(
                "INSTRUCTIONAL_PROTOCOL: apply pressure",
            )),
            Duration::from_millis(0),
        );

        let result = dispatcher.handle("severe bleeding from leg").await;
        assert_eq!(result.origin, Origin::Remote);
        assert!(result.text.starts_with(REMOTE_MARKER));
        assert!(result.text.contains("INSTRUCTIONAL_PROTOCOL: apply pressure"));
    }

    #[tokio::test]
    async fn test_fallback_serves_the_trauma_protocol() {
        let result = offline_dispatcher().handle("severe bleeding from leg").await;
        assert_eq!(result.origin, Origin::Offline);
        assert!(result.text.starts_with(OFFLINE_MARKER));
        assert!(result.text.contains("TRAUMA PROTOCOL"));
        assert!(result.text.contains("1. "));
    }

    #[tokio::test]
    async fn test_fallback_default_is_the_general_advisory() {
        let result = offline_dispatcher().handle("xyzzy nonsense").await;
        assert_eq!(result.origin, Origin::Offline);
        assert!(result.text.contains("signal your position"));
        assert!(!result.text.contains("PROTOCOL //"));
    }

    #[tokio::test]
    async fn test_handle_is_total_on_empty_input() {
        let result = offline_dispatcher().handle("").await;
        assert_eq!(result.origin, Origin::Offline);
        assert!(!result.text.is_empty());
    }

    #[tokio::test]
    async fn test_remote_is_attempted_exactly_once_per_call() {
        let fake = std::sync::Arc::new(FakeAdvisoryClient::always_error(RemoteError::Timeout(12)));
        let dispatcher =
            AdvisoryDispatcher::new(Box::new(fake.clone()), Duration::from_millis(0));

        let first = dispatcher.handle("trapped under rubble").await;
        let second = dispatcher.handle("trapped under rubble").await;

        assert_eq!(fake.call_count(), 2);
        assert_eq!(first.origin, Origin::Offline);
        assert_eq!(first.text, second.text);
    }
}
