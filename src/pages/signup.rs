//! Signup page. Creating an account does not log the user in; on success
//! the page points at the login view.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;

use crate::net::gateway::Gateway;
use crate::net::types::SignupInput;

/// Minimum accepted password length, mirroring the backend's rule so the
/// common case fails before a round-trip.
const MIN_PASSWORD_LEN: usize = 8;

/// Validate signup form input into a ready-to-send [`SignupInput`].
fn validate_signup_input(
    email: &str,
    username: &str,
    first_name: &str,
    last_name: &str,
    password: &str,
    bio: &str,
) -> Result<SignupInput, &'static str> {
    let email = email.trim();
    let username = username.trim();
    let first_name = first_name.trim();
    let last_name = last_name.trim();
    if email.is_empty() || username.is_empty() || first_name.is_empty() || last_name.is_empty() {
        return Err("Fill in email, username, and both name fields.");
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters.");
    }
    let bio = bio.trim();
    Ok(SignupInput {
        email: email.to_owned(),
        username: username.to_owned(),
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        password: password.to_owned(),
        bio: (!bio.is_empty()).then(|| bio.to_owned()),
        avatar: None,
    })
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let gateway = expect_context::<Gateway>();

    let email = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let bio = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let input = match validate_signup_input(
            &email.get(),
            &username.get(),
            &first_name.get(),
            &last_name.get(),
            &password.get(),
            &bio.get(),
        ) {
            Ok(input) => input,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Creating your account...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let gateway = gateway.clone();
            leptos::task::spawn_local(async move {
                match crate::net::auth::signup(&gateway, &input).await {
                    Ok(payload) if payload.success => {
                        info.set("Account created. You can sign in now.".to_owned());
                    }
                    Ok(payload) => {
                        let message =
                            payload.message.unwrap_or_else(|| "signup failed".to_owned());
                        info.set(format!("Signup failed: {message}"));
                        busy.set(false);
                    }
                    Err(e) => {
                        info.set(format!("Signup failed: {e}"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (input, &gateway);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create an account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="First name"
                        prop:value=move || first_name.get()
                        on:input=move |ev| first_name.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Last name"
                        prop:value=move || last_name.get()
                        on:input=move |ev| last_name.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password (8+ characters)"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <textarea
                        class="auth-input auth-input--bio"
                        placeholder="A line about your cooking (optional)"
                        prop:value=move || bio.get()
                        on:input=move |ev| bio.set(event_target_value(&ev))
                    ></textarea>
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "Sign up"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-switch">
                    "Already have an account? " <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
