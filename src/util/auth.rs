//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components that require a signed-in user should apply identical
//! redirect behavior instead of each re-implementing the check.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;

/// Whether a guarded route should bounce this session to `/login`.
///
/// Session restore happens synchronously at startup, so there is no
/// loading phase to wait out; an anonymous session redirects immediately.
pub fn should_redirect_unauth(session: &SessionState) -> bool {
    !session.is_authenticated()
}

/// Redirect to `/login` whenever the session is anonymous.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&session.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}
