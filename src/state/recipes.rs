//! Listing state for the browse page.
//!
//! DESIGN
//! ======
//! The page owns this in its own signal; fetch operations return their
//! results and the page assigns them here, so two in-flight fetches can
//! never clobber shared state.

#[cfg(test)]
#[path = "recipes_test.rs"]
mod recipes_test;

use crate::net::recipes::RecipePage;
use crate::net::types::RecipeSummary;

/// Browse-page listing state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecipesState {
    pub items: Vec<RecipeSummary>,
    /// Total rows matching the current filter, across all pages.
    pub total: i64,
    pub loading: bool,
    pub error: Option<String>,
}

impl RecipesState {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn finish(&mut self, page: RecipePage) {
        self.items = page.items;
        self.total = page.total;
        self.loading = false;
    }

    pub fn fail(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    /// Number of pages at `page_size`, rounding the last partial page up.
    pub fn page_count(&self, page_size: i64) -> i64 {
        if page_size <= 0 {
            return 0;
        }
        (self.total + page_size - 1) / page_size
    }
}
