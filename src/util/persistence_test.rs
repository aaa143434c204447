use super::*;

fn profile() -> Profile {
    serde_json::from_str(
        r#"{"id":"u1","email":"a@b.com","first_name":"Abebe","last_name":"Kebede","username":"abebe"}"#,
    )
    .expect("profile")
}

#[test]
fn memory_store_starts_empty() {
    let store = MemoryPersistence::new();
    assert!(store.load_token().is_none());
    assert!(store.load_profile().is_none());
    assert!(!store.remembered());
}

#[test]
fn save_persists_token_and_profile() {
    let store = MemoryPersistence::new();
    store.save("tok-1", &profile(), false);
    assert_eq!(store.load_token().as_deref(), Some("tok-1"));
    assert_eq!(store.load_profile().expect("profile").id, "u1");
    assert!(!store.remembered());
}

#[test]
fn save_with_remember_sets_marker() {
    let store = MemoryPersistence::new();
    store.save("tok-1", &profile(), true);
    assert!(store.remembered());
}

#[test]
fn clear_removes_everything_and_counts() {
    let store = MemoryPersistence::new();
    store.save("tok-1", &profile(), true);
    store.clear();
    assert!(store.load_token().is_none());
    assert!(store.load_profile().is_none());
    assert!(!store.remembered());
    assert_eq!(store.clear_calls(), 1);
}

#[test]
fn browser_store_is_inert_without_a_window() {
    // Outside a browser the localStorage-backed store reads as empty and
    // accepts writes without effect.
    let store = BrowserPersistence;
    store.save("tok-1", &profile(), true);
    assert!(store.load_token().is_none());
    assert!(store.load_profile().is_none());
    store.clear();
}
