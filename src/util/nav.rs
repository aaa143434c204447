//! Hard-navigation helpers for leaving the app's router.
//!
//! Used for the unauthorized-session redirect and for handing the user
//! off to the payment provider's hosted checkout. In-app navigation goes
//! through `leptos_router` instead.

/// Point the browser at `href`. No-op outside a browser.
pub fn redirect(href: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(href);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = href;
    }
}

/// Send the user to the login view after an authorization failure.
pub fn redirect_to_login() {
    redirect("/login");
}
