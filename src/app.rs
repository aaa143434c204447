//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::site_header::SiteHeader;
use crate::config::GatewayConfig;
use crate::net::gateway::Gateway;
use crate::pages::{
    login::LoginPage, new_recipe::NewRecipePage, recipe::RecipePage, recipes::RecipesPage,
    signup::SignupPage,
};
use crate::state::session::SessionState;
use crate::util::persistence::BrowserPersistence;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the gateway once, restores any persisted session synchronously,
/// and provides both via context before setting up routing. The gateway
/// reads its credential back through the same persistence seam the
/// session writes to, so the two stay in step without further wiring.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let gateway = Gateway::new(GatewayConfig::default(), Arc::new(BrowserPersistence));
    let session = RwSignal::new(SessionState::restore(gateway.persistence()));

    provide_context(gateway);
    provide_context(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/recipehub.css"/>
        <Title text="RecipeHub — Discover Amazing Recipes"/>

        <Router>
            <SiteHeader/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=RecipesPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("signup") view=SignupPage/>
                    <Route path=StaticSegment("submit") view=NewRecipePage/>
                    <Route path=(StaticSegment("recipes"), ParamSegment("id")) view=RecipePage/>
                </Routes>
            </main>
        </Router>
    }
}
