use std::sync::Arc;

use super::*;
use crate::util::persistence::MemoryPersistence;

fn profile() -> crate::net::types::Profile {
    serde_json::from_str(
        r#"{"id":"u1","email":"a@b.com","first_name":"Abebe","last_name":"Kebede","username":"abebe"}"#,
    )
    .expect("profile")
}

#[derive(Debug, PartialEq, serde::Deserialize)]
struct Probe {
    value: i64,
}

#[test]
fn request_body_wraps_document_and_variables() {
    let body = request_body("query Q { x }", serde_json::json!({"limit": 12}));
    assert_eq!(body["query"], "query Q { x }");
    assert_eq!(body["variables"]["limit"], 12);
}

#[test]
fn decode_envelope_returns_data() {
    let decoded: Probe = decode_envelope(r#"{"data": {"value": 3}}"#).expect("data");
    assert_eq!(decoded, Probe { value: 3 });
}

#[test]
fn decode_envelope_surfaces_first_backend_error() {
    let result = decode_envelope::<Probe>(
        r#"{"errors": [{"message": "field not found"}, {"message": "second"}]}"#,
    );
    assert_eq!(result, Err(GatewayError::Backend("field not found".to_owned())));
}

#[test]
fn decode_envelope_prefers_errors_over_partial_data() {
    let result = decode_envelope::<Probe>(
        r#"{"data": {"value": 1}, "errors": [{"message": "constraint violation"}]}"#,
    );
    assert_eq!(result, Err(GatewayError::Backend("constraint violation".to_owned())));
}

#[test]
fn decode_envelope_missing_data_is_transport_failure() {
    let result = decode_envelope::<Probe>("{}");
    assert!(matches!(result, Err(GatewayError::Transport(_))));
}

#[test]
fn decode_envelope_rejects_malformed_json() {
    let result = decode_envelope::<Probe>("not json");
    assert!(matches!(result, Err(GatewayError::Transport(_))));
}

#[test]
fn status_failed_message_includes_status() {
    assert_eq!(status_failed_message(503), "gateway returned status 503");
}

#[test]
fn bearer_token_reads_fresh_from_persistence() {
    let store = Arc::new(MemoryPersistence::new());
    let gateway = Gateway::new(crate::config::GatewayConfig::default(), store.clone());
    assert!(gateway.bearer_token().is_none());

    // A login that lands after construction is visible on the next call.
    store.save("tok-9", &profile(), false);
    assert_eq!(gateway.bearer_token().as_deref(), Some("tok-9"));
}

#[test]
fn expire_session_clears_store_exactly_once() {
    let store = Arc::new(MemoryPersistence::new());
    store.save("tok-9", &profile(), true);
    let gateway = Gateway::new(crate::config::GatewayConfig::default(), store.clone());

    let err = gateway.expire_session();
    assert_eq!(err, GatewayError::Unauthorized);
    assert!(store.load_token().is_none());
    assert!(store.load_profile().is_none());
    assert_eq!(store.clear_calls(), 1);
}
