//! Persisted session storage behind a single substitutable seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! Three `localStorage` entries back the session: the raw bearer token,
//! the profile JSON, and an optional remember-me marker. Every read and
//! write goes through [`SessionPersistence`] so the gateway and the
//! session store never touch the browser directly and tests can swap in
//! [`MemoryPersistence`].

#[cfg(test)]
#[path = "persistence_test.rs"]
mod persistence_test;

use crate::net::types::Profile;

/// Storage key holding the bearer token.
pub const TOKEN_KEY: &str = "auth_token";
/// Storage key holding the serialized profile.
pub const PROFILE_KEY: &str = "auth_user";
/// Storage key marking a remembered login.
pub const REMEMBER_KEY: &str = "remember_me";

/// Read/write access to the persisted session.
pub trait SessionPersistence: Send + Sync {
    /// The persisted bearer token, if any.
    fn load_token(&self) -> Option<String>;
    /// The persisted profile, if any. Undecodable JSON reads as absent.
    fn load_profile(&self) -> Option<Profile>;
    /// Persist a fresh credential and profile; `remember` additionally
    /// sets the remember-me marker.
    fn save(&self, token: &str, profile: &Profile, remember: bool);
    /// Remove every session entry. Always succeeds.
    fn clear(&self);
}

/// `localStorage`-backed persistence. All methods no-op outside the
/// browser so SSR stays deterministic.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserPersistence;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SessionPersistence for BrowserPersistence {
    fn load_token(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(TOKEN_KEY).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn load_profile(&self) -> Option<Profile> {
        #[cfg(feature = "hydrate")]
        {
            let raw = local_storage()?.get_item(PROFILE_KEY).ok().flatten()?;
            serde_json::from_str(&raw).ok()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn save(&self, token: &str, profile: &Profile, remember: bool) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                return;
            };
            let Ok(raw) = serde_json::to_string(profile) else {
                return;
            };
            let _ = storage.set_item(TOKEN_KEY, token);
            let _ = storage.set_item(PROFILE_KEY, &raw);
            if remember {
                let _ = storage.set_item(REMEMBER_KEY, "true");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, profile, remember);
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(TOKEN_KEY);
                let _ = storage.remove_item(PROFILE_KEY);
                let _ = storage.remove_item(REMEMBER_KEY);
            }
        }
    }
}

/// In-memory persistence for unit tests. Tracks how many times `clear`
/// ran so unauthorized-expiry behavior can be asserted.
#[derive(Debug, Default)]
pub struct MemoryPersistence {
    inner: std::sync::Mutex<MemoryEntries>,
}

#[derive(Debug, Default)]
struct MemoryEntries {
    token: Option<String>,
    profile: Option<Profile>,
    remembered: bool,
    clear_calls: u32,
}

impl MemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store as if a previous session had been persisted.
    pub fn seeded(token: Option<&str>, profile: Option<Profile>) -> Self {
        let store = Self::default();
        {
            let mut inner = store.inner.lock().expect("memory store poisoned");
            inner.token = token.map(str::to_owned);
            inner.profile = profile;
        }
        store
    }

    pub fn remembered(&self) -> bool {
        self.inner.lock().expect("memory store poisoned").remembered
    }

    pub fn clear_calls(&self) -> u32 {
        self.inner.lock().expect("memory store poisoned").clear_calls
    }
}

impl SessionPersistence for MemoryPersistence {
    fn load_token(&self) -> Option<String> {
        self.inner.lock().expect("memory store poisoned").token.clone()
    }

    fn load_profile(&self) -> Option<Profile> {
        self.inner.lock().expect("memory store poisoned").profile.clone()
    }

    fn save(&self, token: &str, profile: &Profile, remember: bool) {
        let mut inner = self.inner.lock().expect("memory store poisoned");
        inner.token = Some(token.to_owned());
        inner.profile = Some(profile.clone());
        if remember {
            inner.remembered = true;
        }
    }

    fn clear(&self) {
        let mut inner = self.inner.lock().expect("memory store poisoned");
        inner.token = None;
        inner.profile = None;
        inner.remembered = false;
        inner.clear_calls += 1;
    }
}
