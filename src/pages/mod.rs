//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and its own fetch state, and
//! delegates rendering details to `components`.

pub mod login;
pub mod new_recipe;
pub mod recipe;
pub mod recipes;
pub mod signup;
