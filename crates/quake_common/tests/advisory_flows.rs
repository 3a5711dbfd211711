//! Advisory dispatch flow tests
//!
//! Exercises the full caller contract: dispatch through a stubbed
//! uplink, offline fallback, and transcript bookkeeping on the session
//! the caller owns.

use std::time::Duration;

use quake_common::catalog::{protocol, render};
use quake_common::classifier::classify;
use quake_common::dispatcher::{AdvisoryDispatcher, Origin, OFFLINE_MARKER, REMOTE_MARKER};
use quake_common::remote::{FakeAdvisoryClient, RemoteError, RESPONSE_TOKEN};
use quake_common::{Category, ConversationSession, Role};

fn offline_dispatcher() -> AdvisoryDispatcher {
    AdvisoryDispatcher::new(
        Box::new(FakeAdvisoryClient::always_error(RemoteError::Http(
            "dns failure".to_string(),
        ))),
        Duration::from_millis(0),
    )
}

#[tokio::test]
async fn session_records_two_exchanges_in_call_order() {
    let dispatcher = offline_dispatcher();
    let mut session = ConversationSession::new();

    for query in ["severe bleeding from leg", "we are out of clean water"] {
        session.push(Role::User, query);
        let result = dispatcher.handle(query).await;
        session.push(Role::Assistant, result.text);
    }

    let messages = session.messages();
    assert_eq!(messages.len(), 4);
    assert_eq!(messages[0].role, Role::User);
    assert_eq!(messages[1].role, Role::Assistant);
    assert_eq!(messages[2].role, Role::User);
    assert_eq!(messages[3].role, Role::Assistant);
    assert!(messages.windows(2).all(|w| w[0].sequence < w[1].sequence));

    assert!(messages[1].text.contains("TRAUMA PROTOCOL"));
    assert!(messages[3].text.contains("SANITATION PROTOCOL"));
}

#[tokio::test]
async fn remote_result_carries_the_stub_payload_verbatim() {
    let payload = format!("{RESPONSE_TOKEN} \u{1f9ed} move to open ground");
    let dispatcher = AdvisoryDispatcher::new(
        Box::new(FakeAdvisoryClient::always_text(payload.clone())),
        Duration::from_millis(0),
    );

    let result = dispatcher.handle("what do I do after the shaking stops").await;
    assert_eq!(result.origin, Origin::Remote);
    assert!(result.text.starts_with(REMOTE_MARKER));
    assert!(result.text.contains(&payload));
}

#[tokio::test]
async fn every_failure_mode_recovers_offline() {
    let failures = vec![
        RemoteError::Http("HTTP 503 from generation endpoint".to_string()),
        RemoteError::Timeout(12),
        RemoteError::MalformedPayload("unexpected EOF".to_string()),
        RemoteError::MissingCandidate,
        RemoteError::EmptyResponse,
    ];

    for failure in failures {
        let dispatcher = AdvisoryDispatcher::new(
            Box::new(FakeAdvisoryClient::always_error(failure)),
            Duration::from_millis(0),
        );
        let result = dispatcher.handle("deep cut on the arm").await;
        assert_eq!(result.origin, Origin::Offline);
        assert!(result.text.starts_with(OFFLINE_MARKER));
        assert!(!result.text.is_empty());
    }
}

#[tokio::test]
async fn uplink_recovery_between_calls_switches_origin() {
    let dispatcher = AdvisoryDispatcher::new(
        Box::new(FakeAdvisoryClient::new(vec![
            Err(RemoteError::Timeout(12)),
            Ok(format!("{RESPONSE_TOKEN} rest and hydrate")),
        ])),
        Duration::from_millis(0),
    );

    let first = dispatcher.handle("fever and vomiting").await;
    assert_eq!(first.origin, Origin::Offline);

    let second = dispatcher.handle("fever and vomiting").await;
    assert_eq!(second.origin, Origin::Remote);
}

#[test]
fn offline_text_matches_the_classified_catalog_entry() {
    let query = "a child alone and crying in the shelter";
    let category = classify(query);
    assert_eq!(category, Category::Maternal);

    let block = render(protocol(category));
    assert!(block.starts_with("MATERNAL & CHILD PROTOCOL"));
}
