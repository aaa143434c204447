use super::*;
use crate::util::persistence::MemoryPersistence;

fn profile() -> Profile {
    serde_json::from_str(
        r#"{"id":"u1","email":"a@b.com","first_name":"Abebe","last_name":"Kebede","username":"abebe"}"#,
    )
    .expect("profile")
}

fn success_payload() -> AuthPayload {
    AuthPayload {
        success: true,
        message: None,
        access_token: Some("tok-1".to_owned()),
        refresh_token: Some("refresh-1".to_owned()),
        user: Some(profile()),
    }
}

// =============================================================
// Restore
// =============================================================

#[test]
fn restore_with_both_entries_is_authenticated() {
    let store = MemoryPersistence::seeded(Some("tok-1"), Some(profile()));
    let session = SessionState::restore(&store);
    assert!(session.is_authenticated());
    assert_eq!(session.token(), Some("tok-1"));
    assert_eq!(session.profile().expect("profile").id, "u1");
}

#[test]
fn restore_with_token_only_is_anonymous() {
    let store = MemoryPersistence::seeded(Some("tok-1"), None);
    assert!(!SessionState::restore(&store).is_authenticated());
}

#[test]
fn restore_with_profile_only_is_anonymous() {
    let store = MemoryPersistence::seeded(None, Some(profile()));
    assert!(!SessionState::restore(&store).is_authenticated());
}

#[test]
fn restore_with_empty_storage_is_anonymous() {
    let store = MemoryPersistence::new();
    assert_eq!(SessionState::restore(&store), SessionState::default());
}

// =============================================================
// Login
// =============================================================

#[test]
fn complete_login_persists_and_authenticates() {
    let store = MemoryPersistence::new();
    let session = complete_login(&store, success_payload(), false).expect("login");
    assert!(session.is_authenticated());
    assert_eq!(store.load_token().as_deref(), Some("tok-1"));
    assert_eq!(store.load_profile().expect("profile").id, "u1");
    assert!(!store.remembered());
}

#[test]
fn complete_login_with_remember_sets_marker() {
    let store = MemoryPersistence::new();
    complete_login(&store, success_payload(), true).expect("login");
    assert!(store.remembered());
}

#[test]
fn rejected_login_surfaces_backend_message_and_touches_nothing() {
    let store = MemoryPersistence::new();
    let payload = AuthPayload {
        success: false,
        message: Some("bad credentials".to_owned()),
        access_token: None,
        refresh_token: None,
        user: None,
    };
    let err = complete_login(&store, payload, false).expect_err("rejected");
    assert_eq!(err, AuthError::Rejected("bad credentials".to_owned()));
    assert!(store.load_token().is_none());
    assert!(store.load_profile().is_none());
    assert_eq!(store.clear_calls(), 0);
}

#[test]
fn successful_payload_without_token_is_rejected() {
    let store = MemoryPersistence::new();
    let payload = AuthPayload {
        success: true,
        message: None,
        access_token: None,
        refresh_token: None,
        user: Some(profile()),
    };
    assert!(complete_login(&store, payload, false).is_err());
    assert!(store.load_token().is_none());
}

#[test]
fn login_token_is_visible_to_subsequent_gateway_calls() {
    let store = std::sync::Arc::new(MemoryPersistence::new());
    let gateway = Gateway::new(crate::config::GatewayConfig::default(), store.clone());
    assert!(gateway.bearer_token().is_none());

    complete_login(store.as_ref(), success_payload(), false).expect("login");
    assert_eq!(gateway.bearer_token().as_deref(), Some("tok-1"));
}

// =============================================================
// Logout
// =============================================================

#[test]
fn sign_out_clears_storage_from_any_state() {
    let store = MemoryPersistence::seeded(Some("tok-1"), Some(profile()));
    let session = sign_out(&store);
    assert!(!session.is_authenticated());
    assert!(store.load_token().is_none());
    assert!(store.load_profile().is_none());
}

#[test]
fn sign_out_of_anonymous_session_still_succeeds() {
    let store = MemoryPersistence::new();
    assert_eq!(sign_out(&store), SessionState::default());
    assert_eq!(store.clear_calls(), 1);
}
