//! Site-wide header with navigation and session controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! The header is the one place that renders auth state and hosts logout,
//! so every page shows a consistent session affordance.

use leptos::prelude::*;

use crate::net::gateway::Gateway;
use crate::state::session::{SessionState, sign_out};

#[component]
pub fn SiteHeader() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let gateway = expect_context::<Gateway>();

    let display_name = move || {
        session
            .get()
            .profile()
            .map(crate::net::types::Profile::display_name)
            .unwrap_or_default()
    };

    let on_logout = Callback::new(move |()| {
        session.set(sign_out(gateway.persistence()));
        crate::util::nav::redirect("/");
    });

    view! {
        <header class="site-header">
            <a class="site-header__brand" href="/">
                "RecipeHub"
            </a>
            <nav class="site-header__nav">
                <a href="/">"Browse"</a>
                <a href="/submit">"Share a recipe"</a>
            </nav>
            <Show
                when=move || session.get().is_authenticated()
                fallback=|| {
                    view! {
                        <span class="site-header__session">
                            <a href="/login">"Log in"</a>
                            <a class="site-header__signup" href="/signup">
                                "Sign up"
                            </a>
                        </span>
                    }
                }
            >
                <span class="site-header__session">
                    <span class="site-header__user">{display_name}</span>
                    <button class="site-header__logout" on:click=move |_| on_logout.run(())>
                        "Log out"
                    </button>
                </span>
            </Show>
        </header>
    }
}
