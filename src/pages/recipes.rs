//! Recipe browse page: the landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the listing state in page-local signals; every filter change
//! re-runs the fetch effect and the page assigns whatever the operation
//! returns.

#[cfg(test)]
#[path = "recipes_test.rs"]
mod recipes_test;

use leptos::prelude::*;

use crate::components::recipe_card::RecipeCard;
use crate::net::gateway::Gateway;
use crate::net::queries::{DEFAULT_PAGE_SIZE, RecipeFilters};
use crate::net::types::Category;
use crate::state::recipes::RecipesState;

/// Preparation-minute cap applied by the "quick" toggle.
const QUICK_PREP_MINUTES: i64 = 30;

/// Assemble listing filters from the page's input signals. Blank inputs
/// mean "no filter"; the page index turns into a row offset.
fn filters_from_inputs(
    search: &str,
    category_id: &str,
    difficulty: &str,
    sort_by: &str,
    quick_only: bool,
    page: i64,
) -> RecipeFilters {
    let non_empty = |s: &str| {
        let s = s.trim();
        (!s.is_empty()).then(|| s.to_owned())
    };
    RecipeFilters {
        search: non_empty(search),
        category_id: non_empty(category_id),
        difficulty: non_empty(difficulty),
        cuisine_type: None,
        max_prep_time: quick_only.then_some(QUICK_PREP_MINUTES),
        sort_by: non_empty(sort_by),
        limit: DEFAULT_PAGE_SIZE,
        offset: page.max(0) * DEFAULT_PAGE_SIZE,
    }
}

#[component]
pub fn RecipesPage() -> impl IntoView {
    let gateway = expect_context::<Gateway>();

    let listing = RwSignal::new(RecipesState::default());
    let categories = RwSignal::new(Vec::<Category>::new());

    let search = RwSignal::new(String::new());
    let category_id = RwSignal::new(String::new());
    let difficulty = RwSignal::new(String::new());
    let sort_by = RwSignal::new(String::new());
    let quick_only = RwSignal::new(false);
    let page = RwSignal::new(0i64);

    // Categories feed the filter dropdown; fetched once. A failed fetch
    // leaves the dropdown on "All categories" (the gateway already
    // observed the error).
    {
        let gateway = gateway.clone();
        let requested = RwSignal::new(false);
        Effect::new(move || {
            if requested.get() {
                return;
            }
            requested.set(true);
            let gateway = gateway.clone();
            leptos::task::spawn_local(async move {
                if let Ok(list) = crate::net::recipes::fetch_categories(&gateway).await {
                    categories.set(list);
                }
            });
        });
    }

    // Re-fetch the listing whenever any filter input changes.
    {
        let gateway = gateway.clone();
        Effect::new(move || {
            let filters = filters_from_inputs(
                &search.get(),
                &category_id.get(),
                &difficulty.get(),
                &sort_by.get(),
                quick_only.get(),
                page.get(),
            );
            listing.update(RecipesState::begin_load);
            let gateway = gateway.clone();
            leptos::task::spawn_local(async move {
                match crate::net::recipes::fetch_recipes(&gateway, &filters).await {
                    Ok(result) => listing.update(|state| state.finish(result)),
                    Err(e) => listing.update(|state| state.fail(e.to_string())),
                }
            });
        });
    }

    let has_prev = move || page.get() > 0;
    let has_next = move || page.get() + 1 < listing.get().page_count(DEFAULT_PAGE_SIZE);
    let page_label = move || {
        let total_pages = listing.get().page_count(DEFAULT_PAGE_SIZE).max(1);
        format!("Page {} of {}", page.get() + 1, total_pages)
    };
    let no_results = move || {
        let state = listing.get();
        !state.loading && state.error.is_none() && state.items.is_empty()
    };

    view! {
        <div class="browse-page">
            <section class="browse-filters">
                <input
                    class="browse-search"
                    type="search"
                    placeholder="Search recipes..."
                    prop:value=move || search.get()
                    on:input=move |ev| {
                        search.set(event_target_value(&ev));
                        page.set(0);
                    }
                />
                <select on:change=move |ev| {
                    category_id.set(event_target_value(&ev));
                    page.set(0);
                }>
                    <option value="">"All categories"</option>
                    <For
                        each=move || categories.get()
                        key=|category| category.id.clone()
                        children=move |category: Category| {
                            view! {
                                <option value=category.id.clone()>
                                    {format!("{} ({})", category.name, category.recipe_count)}
                                </option>
                            }
                        }
                    />
                </select>
                <select on:change=move |ev| {
                    difficulty.set(event_target_value(&ev));
                    page.set(0);
                }>
                    <option value="">"Any difficulty"</option>
                    <option value="easy">"Easy"</option>
                    <option value="medium">"Medium"</option>
                    <option value="hard">"Hard"</option>
                </select>
                <select on:change=move |ev| {
                    sort_by.set(event_target_value(&ev));
                    page.set(0);
                }>
                    <option value="">"Newest first"</option>
                    <option value="price_asc">"Price: low to high"</option>
                    <option value="price_desc">"Price: high to low"</option>
                    <option value="prep_time_asc">"Quickest prep"</option>
                    <option value="average_rating_desc">"Top rated"</option>
                </select>
                <label class="browse-quick">
                    <input
                        type="checkbox"
                        prop:checked=move || quick_only.get()
                        on:change=move |ev| {
                            quick_only.set(event_target_checked(&ev));
                            page.set(0);
                        }
                    />
                    "Under 30 min prep"
                </label>
            </section>

            <section class="browse-results">
                <Show when=move || listing.get().loading>
                    <p class="browse-status">"Loading recipes..."</p>
                </Show>
                <Show when=move || listing.get().error.is_some()>
                    <p class="browse-status browse-status--error">
                        {move || listing.get().error.unwrap_or_default()}
                    </p>
                </Show>
                <div class="browse-grid">
                    <For
                        each=move || listing.get().items
                        key=|recipe| recipe.id.clone()
                        children=move |recipe| view! { <RecipeCard recipe/> }
                    />
                </div>
                <Show when=no_results>
                    <p class="browse-status">"No recipes match those filters."</p>
                </Show>
            </section>

            <nav class="browse-pager">
                <button disabled=move || !has_prev() on:click=move |_| page.update(|p| *p -= 1)>
                    "Previous"
                </button>
                <span class="browse-pager__label">{page_label}</span>
                <button disabled=move || !has_next() on:click=move |_| page.update(|p| *p += 1)>
                    "Next"
                </button>
            </nav>
        </div>
    }
}
