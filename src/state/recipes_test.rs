use super::*;

fn page(total: i64) -> RecipePage {
    RecipePage { items: Vec::new(), total }
}

#[test]
fn default_state_is_empty_and_idle() {
    let state = RecipesState::default();
    assert!(state.items.is_empty());
    assert_eq!(state.total, 0);
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn begin_load_clears_previous_error() {
    let mut state = RecipesState::default();
    state.fail("boom".to_owned());
    state.begin_load();
    assert!(state.loading);
    assert!(state.error.is_none());
}

#[test]
fn finish_replaces_items_and_total() {
    let mut state = RecipesState::default();
    state.begin_load();
    state.finish(page(40));
    assert!(!state.loading);
    assert_eq!(state.total, 40);
}

#[test]
fn fail_records_message_and_stops_loading() {
    let mut state = RecipesState::default();
    state.begin_load();
    state.fail("gateway returned status 503".to_owned());
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("gateway returned status 503"));
}

#[test]
fn page_count_rounds_up() {
    let mut state = RecipesState::default();
    state.finish(page(25));
    assert_eq!(state.page_count(12), 3);
    state.finish(page(24));
    assert_eq!(state.page_count(12), 2);
    state.finish(page(0));
    assert_eq!(state.page_count(12), 0);
}

#[test]
fn page_count_with_bad_page_size_is_zero() {
    let state = RecipesState::default();
    assert_eq!(state.page_count(0), 0);
}
