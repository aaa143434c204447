//! Session store: the current credential and profile.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session is the only state shared across routes. It is restored
//! synchronously from persisted storage at startup, written on login, and
//! cleared on logout or when the gateway observes an authorization
//! failure.
//!
//! INVARIANT
//! =========
//! A profile is present iff a token is. The fields are private and only
//! reachable through constructors that keep the pair together.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::auth::AuthError;
use crate::net::gateway::Gateway;
use crate::net::types::{AuthPayload, Credentials, Profile};
use crate::util::persistence::SessionPersistence;

/// Authentication state for the current browser user.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    token: Option<String>,
    profile: Option<Profile>,
}

impl SessionState {
    pub fn authenticated(token: String, profile: Profile) -> Self {
        Self {
            token: Some(token),
            profile: Some(profile),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    /// Restore a previous session from persisted storage. Requires both
    /// entries; a lone leftover token or profile reads as anonymous.
    pub fn restore(store: &dyn SessionPersistence) -> Self {
        match (store.load_token(), store.load_profile()) {
            (Some(token), Some(profile)) => Self::authenticated(token, profile),
            _ => Self::default(),
        }
    }
}

/// Apply a login payload.
///
/// A rejected payload fails with the backend's message and leaves both
/// the storage and the caller's session untouched. A successful payload
/// is persisted (the gateway picks the token up on its next call) and the
/// new authenticated state is returned for the caller to assign.
///
/// # Errors
///
/// [`AuthError::Rejected`] when the backend said no or the payload is
/// missing its credential or profile.
pub fn complete_login(
    store: &dyn SessionPersistence,
    payload: AuthPayload,
    remember: bool,
) -> Result<SessionState, AuthError> {
    if !payload.success {
        let message = payload.message.unwrap_or_else(|| "login failed".to_owned());
        return Err(AuthError::Rejected(message));
    }
    let (Some(token), Some(profile)) = (payload.access_token, payload.user) else {
        return Err(AuthError::Rejected("login response missing credential".to_owned()));
    };
    store.save(&token, &profile, remember);
    Ok(SessionState::authenticated(token, profile))
}

/// Full login flow: run the mutation, persist on success, return the new
/// session state.
///
/// # Errors
///
/// [`AuthError::Rejected`] for backend refusals, [`AuthError::Gateway`]
/// for transport and authorization failures.
pub async fn sign_in(
    gateway: &Gateway,
    credentials: &Credentials,
) -> Result<SessionState, AuthError> {
    let payload = crate::net::auth::login(gateway, credentials).await?;
    complete_login(gateway.persistence(), payload, credentials.remember_me)
}

/// Log out. Always succeeds locally regardless of current state: clears
/// every persisted entry and returns the anonymous state.
pub fn sign_out(store: &dyn SessionPersistence) -> SessionState {
    store.clear();
    SessionState::default()
}
