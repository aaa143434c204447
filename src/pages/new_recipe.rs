//! Recipe submission page. Requires a signed-in user; uploads the cover
//! image first, then inserts the recipe and navigates to it.

#[cfg(test)]
#[path = "new_recipe_test.rs"]
mod new_recipe_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::gateway::Gateway;
use crate::net::types::{Category, NewRecipe};
use crate::state::session::SessionState;
use crate::util::auth::install_unauth_redirect;

/// DOM id of the cover-image file input; the file handle is read straight
/// off the input at submit time instead of being mirrored into state.
const IMAGE_INPUT_ID: &str = "recipe-image-input";

/// Parse an optional whole-number field; empty means absent.
fn parse_optional_count(raw: &str) -> Result<Option<i64>, &'static str> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<i64>()
        .ok()
        .filter(|v| *v >= 0)
        .map(Some)
        .ok_or("Times and servings must be whole numbers.")
}

/// Parse an optional price field; empty means absent (a free recipe).
fn parse_optional_price(raw: &str) -> Result<Option<f64>, &'static str> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<f64>()
        .ok()
        .filter(|v| *v >= 0.0)
        .map(Some)
        .ok_or("Price must be a non-negative number.")
}

/// Validate the form into an insert-ready [`NewRecipe`]. The uploaded
/// image URL is attached afterwards, once the upload has finished.
#[allow(clippy::too_many_arguments)]
fn build_new_recipe(
    title: &str,
    description: &str,
    category_id: &str,
    difficulty: &str,
    cuisine_type: &str,
    prep_time: &str,
    cook_time: &str,
    servings: &str,
    price: &str,
) -> Result<NewRecipe, &'static str> {
    let title = title.trim();
    if title.is_empty() {
        return Err("Give your recipe a title.");
    }
    let non_empty = |s: &str| {
        let s = s.trim();
        (!s.is_empty()).then(|| s.to_owned())
    };
    Ok(NewRecipe {
        title: title.to_owned(),
        description: non_empty(description),
        category_id: non_empty(category_id),
        difficulty: non_empty(difficulty),
        cuisine_type: non_empty(cuisine_type),
        prep_time: parse_optional_count(prep_time)?,
        cook_time: parse_optional_count(cook_time)?,
        servings: parse_optional_count(servings)?,
        price: parse_optional_price(price)?,
        featured_image: None,
    })
}

#[cfg(feature = "hydrate")]
fn selected_image_file() -> Option<web_sys::File> {
    use wasm_bindgen::JsCast;
    let input = web_sys::window()?
        .document()?
        .get_element_by_id(IMAGE_INPUT_ID)?
        .dyn_into::<web_sys::HtmlInputElement>()
        .ok()?;
    input.files()?.get(0)
}

#[component]
pub fn NewRecipePage() -> impl IntoView {
    let gateway = expect_context::<Gateway>();
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    install_unauth_redirect(session, navigate);

    let categories = RwSignal::new(Vec::<Category>::new());
    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let category_id = RwSignal::new(String::new());
    let difficulty = RwSignal::new(String::new());
    let cuisine_type = RwSignal::new(String::new());
    let prep_time = RwSignal::new(String::new());
    let cook_time = RwSignal::new(String::new());
    let servings = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

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

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let recipe = match build_new_recipe(
            &title.get(),
            &description.get(),
            &category_id.get(),
            &difficulty.get(),
            &cuisine_type.get(),
            &prep_time.get(),
            &cook_time.get(),
            &servings.get(),
            &price.get(),
        ) {
            Ok(recipe) => recipe,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Publishing your recipe...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let gateway = gateway.clone();
            leptos::task::spawn_local(async move {
                let mut recipe = recipe;
                if let Some(file) = selected_image_file() {
                    match crate::net::upload::upload(
                        &gateway,
                        &file,
                        crate::net::upload::DEFAULT_CATEGORY,
                    )
                    .await
                    {
                        Ok(url) => recipe.featured_image = Some(url),
                        Err(e) => {
                            info.set(format!("Image upload failed: {e}"));
                            busy.set(false);
                            return;
                        }
                    }
                }
                match crate::net::recipes::create_recipe(&gateway, &recipe).await {
                    Ok(created) => {
                        crate::util::nav::redirect(&format!("/recipes/{}", created.id));
                    }
                    Err(e) => {
                        info.set(format!("Could not publish recipe: {e}"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (recipe, &gateway);
        }
    };

    view! {
        <div class="submit-page">
            <h1>"Share a recipe"</h1>
            <form class="submit-form" on:submit=on_submit>
                <input
                    class="submit-input"
                    type="text"
                    placeholder="Recipe title"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
                <textarea
                    class="submit-input submit-input--description"
                    placeholder="What makes this recipe special?"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
                <select on:change=move |ev| category_id.set(event_target_value(&ev))>
                    <option value="">"Pick a category"</option>
                    <For
                        each=move || categories.get()
                        key=|category| category.id.clone()
                        children=move |category: Category| {
                            view! { <option value=category.id.clone()>{category.name.clone()}</option> }
                        }
                    />
                </select>
                <select on:change=move |ev| difficulty.set(event_target_value(&ev))>
                    <option value="">"Difficulty"</option>
                    <option value="easy">"Easy"</option>
                    <option value="medium">"Medium"</option>
                    <option value="hard">"Hard"</option>
                </select>
                <input
                    class="submit-input"
                    type="text"
                    placeholder="Cuisine (e.g. ethiopian)"
                    prop:value=move || cuisine_type.get()
                    on:input=move |ev| cuisine_type.set(event_target_value(&ev))
                />
                <div class="submit-numbers">
                    <input
                        type="number"
                        min="0"
                        placeholder="Prep minutes"
                        prop:value=move || prep_time.get()
                        on:input=move |ev| prep_time.set(event_target_value(&ev))
                    />
                    <input
                        type="number"
                        min="0"
                        placeholder="Cook minutes"
                        prop:value=move || cook_time.get()
                        on:input=move |ev| cook_time.set(event_target_value(&ev))
                    />
                    <input
                        type="number"
                        min="0"
                        placeholder="Servings"
                        prop:value=move || servings.get()
                        on:input=move |ev| servings.set(event_target_value(&ev))
                    />
                    <input
                        type="number"
                        min="0"
                        step="0.01"
                        placeholder="Price (blank = free)"
                        prop:value=move || price.get()
                        on:input=move |ev| price.set(event_target_value(&ev))
                    />
                </div>
                <label class="submit-image">
                    "Cover image"
                    <input id=IMAGE_INPUT_ID type="file" accept="image/jpeg,image/png,image/webp"/>
                </label>
                <button class="submit-button" type="submit" disabled=move || busy.get()>
                    "Publish recipe"
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="submit-message">{move || info.get()}</p>
            </Show>
        </div>
    }
}
