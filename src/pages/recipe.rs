//! Recipe detail page with like, bookmark, and purchase actions.

#[cfg(test)]
#[path = "recipe_test.rs"]
mod recipe_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::gateway::Gateway;
use crate::net::types::{RecipeDetail, RecipeIngredient, RecipeNutrition};
use crate::state::session::SessionState;
use crate::util::format::{format_minutes, format_price, format_rating};

/// Render an ingredient line like `"2 cups flour (sifted)"`.
fn ingredient_line(item: &RecipeIngredient) -> String {
    let mut parts: Vec<String> = Vec::new();
    if let Some(amount) = item.amount {
        parts.push(format_amount(amount));
    }
    if let Some(unit) = item.unit.as_deref().map(str::trim).filter(|u| !u.is_empty()) {
        parts.push(unit.to_owned());
    }
    parts.push(item.ingredient.name.clone());
    let mut line = parts.join(" ");
    if let Some(notes) = item.notes.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
        line.push_str(&format!(" ({notes})"));
    }
    line
}

/// Whole amounts drop their fraction; everything else prints as-is.
fn format_amount(amount: f64) -> String {
    if amount.fract().abs() < f64::EPSILON {
        format!("{amount:.0}")
    } else {
        format!("{amount}")
    }
}

/// Nutrition rows that actually have a value, in label order.
fn nutrition_rows(nutrition: &RecipeNutrition) -> Vec<(&'static str, f64)> {
    [
        ("Calories", nutrition.calories),
        ("Protein", nutrition.protein),
        ("Carbohydrates", nutrition.carbohydrates),
        ("Fat", nutrition.fat),
        ("Fiber", nutrition.fiber),
        ("Sugar", nutrition.sugar),
        ("Sodium", nutrition.sodium),
    ]
    .into_iter()
    .filter_map(|(label, value)| value.map(|v| (label, v)))
    .collect()
}

/// The amount to charge for a paid recipe; `None` means it is free.
fn purchase_amount(detail: &RecipeDetail) -> Option<f64> {
    detail.price.filter(|p| *p > 0.0)
}

#[component]
pub fn RecipePage() -> impl IntoView {
    let gateway = expect_context::<Gateway>();
    let session = expect_context::<RwSignal<SessionState>>();
    let params = use_params_map();

    let detail = RwSignal::new(None::<RecipeDetail>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    // Whether the current user likes/bookmarks this recipe is unknown
    // until they toggle; the detail selection does not carry it.
    let liked = RwSignal::new(None::<bool>);
    let bookmarked = RwSignal::new(None::<bool>);
    let info = RwSignal::new(String::new());

    {
        let gateway = gateway.clone();
        Effect::new(move || {
            let Some(id) = params.get().get("id") else {
                return;
            };
            loading.set(true);
            error.set(None);
            let gateway = gateway.clone();
            leptos::task::spawn_local(async move {
                match crate::net::recipes::fetch_recipe(&gateway, &id).await {
                    Ok(found) => {
                        detail.set(found);
                        loading.set(false);
                    }
                    Err(e) => {
                        error.set(Some(e.to_string()));
                        loading.set(false);
                    }
                }
            });
        });
    }

    let on_like = Callback::new({
        let gateway = gateway.clone();
        move |recipe_id: String| {
            if !session.get().is_authenticated() {
                info.set("Sign in to like recipes.".to_owned());
                return;
            }
            let gateway = gateway.clone();
            leptos::task::spawn_local(async move {
                match crate::net::recipes::toggle_like(&gateway, &recipe_id).await {
                    Ok(result) => {
                        liked.set(Some(result.is_liked));
                        detail.update(|d| {
                            if let Some(d) = d {
                                d.likes_count = result.likes_count;
                            }
                        });
                    }
                    Err(e) => info.set(format!("Could not update like: {e}")),
                }
            });
        }
    });

    let on_bookmark = Callback::new({
        let gateway = gateway.clone();
        move |recipe_id: String| {
            if !session.get().is_authenticated() {
                info.set("Sign in to bookmark recipes.".to_owned());
                return;
            }
            let gateway = gateway.clone();
            leptos::task::spawn_local(async move {
                match crate::net::recipes::toggle_bookmark(&gateway, &recipe_id).await {
                    Ok(result) => bookmarked.set(Some(result.is_bookmarked)),
                    Err(e) => info.set(format!("Could not update bookmark: {e}")),
                }
            });
        }
    });

    let on_buy = Callback::new({
        let gateway = gateway.clone();
        move |(recipe_id, amount): (String, f64)| {
            if !session.get().is_authenticated() {
                info.set("Sign in to buy recipes.".to_owned());
                return;
            }
            info.set("Preparing checkout...".to_owned());
            let gateway = gateway.clone();
            leptos::task::spawn_local(async move {
                match crate::net::payment::initialize_payment(&gateway, &recipe_id, amount).await {
                    Ok(result) if result.success => {
                        if let Some(url) = result.checkout_url {
                            crate::util::nav::redirect(&url);
                        } else {
                            info.set("Checkout is not available right now.".to_owned());
                        }
                    }
                    Ok(result) => {
                        let message =
                            result.message.unwrap_or_else(|| "payment refused".to_owned());
                        info.set(format!("Payment failed: {message}"));
                    }
                    Err(e) => info.set(format!("Payment failed: {e}")),
                }
            });
        }
    });

    let not_found = move || !loading.get() && error.get().is_none() && detail.get().is_none();

    view! {
        <div class="recipe-page">
            <Show when=move || loading.get()>
                <p class="recipe-status">"Loading recipe..."</p>
            </Show>
            <Show when=move || error.get().is_some()>
                <p class="recipe-status recipe-status--error">
                    {move || error.get().unwrap_or_default()}
                </p>
            </Show>
            <Show when=not_found>
                <p class="recipe-status">"Recipe not found."</p>
            </Show>
            {move || {
                detail
                    .get()
                    .map(|d| {
                        let like_id = d.id.clone();
                        let bookmark_id = d.id.clone();
                        let buy = purchase_amount(&d).map(|amount| (d.id.clone(), amount));
                        let byline = d
                            .author
                            .as_ref()
                            .map(|author| format!("by {}", author.display_name()));
                        view! {
                            <article class="recipe-detail">
                                <header class="recipe-detail__header">
                                    <h1>{d.title.clone()}</h1>
                                    {byline.map(|text| view! { <p class="recipe-detail__byline">{text}</p> })}
                                    <p class="recipe-detail__meta">
                                        {d.category.as_ref().map(|c| format!("{} · ", c.name)).unwrap_or_default()}
                                        {format!(
                                            "{} · ★ {} ({} reviews) · ♥ {}",
                                            d.total_time.map(format_minutes).unwrap_or_else(|| "—".to_owned()),
                                            format_rating(d.average_rating),
                                            d.reviews_count,
                                            d.likes_count,
                                        )}
                                    </p>
                                </header>
                                {d.featured_image
                                    .clone()
                                    .map(|src| view! { <img class="recipe-detail__image" src=src alt=d.title.clone()/> })}
                                {d.description
                                    .clone()
                                    .map(|text| view! { <p class="recipe-detail__description">{text}</p> })}

                                <div class="recipe-detail__actions">
                                    <button on:click=move |_| on_like.run(like_id.clone())>
                                        {move || if liked.get() == Some(true) { "♥ Liked" } else { "♥ Like" }}
                                    </button>
                                    <button on:click=move |_| on_bookmark.run(bookmark_id.clone())>
                                        {move || {
                                            if bookmarked.get() == Some(true) { "🔖 Saved" } else { "🔖 Save" }
                                        }}
                                    </button>
                                    {buy
                                        .map(|payload| {
                                            let label = format!("Buy for {}", format_price(Some(payload.1)));
                                            view! {
                                                <button
                                                    class="recipe-detail__buy"
                                                    on:click=move |_| on_buy.run(payload.clone())
                                                >
                                                    {label}
                                                </button>
                                            }
                                        })}
                                </div>

                                <section class="recipe-detail__ingredients">
                                    <h2>"Ingredients"</h2>
                                    <ul>
                                        {d.ingredients
                                            .iter()
                                            .map(|item| view! { <li>{ingredient_line(item)}</li> })
                                            .collect_view()}
                                    </ul>
                                </section>

                                <section class="recipe-detail__steps">
                                    <h2>"Steps"</h2>
                                    <ol>
                                        {d.steps
                                            .iter()
                                            .map(|step| {
                                                let timer = step
                                                    .timer_minutes
                                                    .map(|m| format!(" ({})", format_minutes(m)));
                                                view! {
                                                    <li>
                                                        {step.instruction.clone()}
                                                        {timer.unwrap_or_default()}
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ol>
                                </section>

                                {d.nutrition
                                    .as_ref()
                                    .map(|n| {
                                        view! {
                                            <section class="recipe-detail__nutrition">
                                                <h2>"Nutrition per serving"</h2>
                                                <ul>
                                                    {nutrition_rows(n)
                                                        .into_iter()
                                                        .map(|(label, value)| {
                                                            view! { <li>{format!("{label}: {value}")}</li> }
                                                        })
                                                        .collect_view()}
                                                </ul>
                                            </section>
                                        }
                                    })}

                                <section class="recipe-detail__reviews">
                                    <h2>"Recent reviews"</h2>
                                    {d.reviews
                                        .iter()
                                        .map(|review| {
                                            let reviewer = review.user.display_name();
                                            view! {
                                                <div class="recipe-review">
                                                    <span class="recipe-review__rating">
                                                        {format!("★ {}", review.rating)}
                                                    </span>
                                                    <span class="recipe-review__author">{reviewer}</span>
                                                    {review
                                                        .comment
                                                        .clone()
                                                        .map(|text| view! { <p class="recipe-review__comment">{text}</p> })}
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </section>
                            </article>
                        }
                    })
            }}
            <Show when=move || !info.get().is_empty()>
                <p class="recipe-status recipe-status--info">{move || info.get()}</p>
            </Show>
        </div>
    }
}
