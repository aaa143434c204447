//! Reactive application state.
//!
//! ARCHITECTURE
//! ============
//! Only the session is shared app-wide (provided via context by `app`).
//! Listing and detail state is owned by the page that fetches it, per the
//! return-and-assign rule in `net::recipes`.

pub mod recipes;
pub mod session;
