//! Card component for recipe list items on the browse page.

use leptos::prelude::*;

use crate::net::types::{RecipeAuthor, RecipeSummary};
use crate::util::format::{format_minutes, format_price, format_rating};

/// A clickable card representing one recipe in a listing.
#[component]
pub fn RecipeCard(recipe: RecipeSummary) -> impl IntoView {
    let href = format!("/recipes/{}", recipe.id);
    let category = recipe.category.as_ref().map(|c| c.name.clone());
    let author = recipe.author.as_ref().map(RecipeAuthor::display_name);
    let time = recipe.total_time.map(format_minutes);

    view! {
        <a class="recipe-card" href=href>
            <span class="recipe-card__media">
                {recipe
                    .featured_image
                    .clone()
                    .map(|src| view! { <img class="recipe-card__image" src=src alt=recipe.title.clone()/> })}
                <span class="recipe-card__price">{format_price(recipe.price)}</span>
            </span>
            <span class="recipe-card__body">
                <span class="recipe-card__title">{recipe.title.clone()}</span>
                {category.map(|name| view! { <span class="recipe-card__category">{name}</span> })}
                <span class="recipe-card__meta">
                    <span title="Total time">{time.unwrap_or_else(|| "—".to_owned())}</span>
                    <span title="Average rating">{format!("★ {}", format_rating(recipe.average_rating))}</span>
                    <span title="Likes">{format!("♥ {}", recipe.likes_count)}</span>
                </span>
                {author.map(|name| view! { <span class="recipe-card__author">{format!("by {name}")}</span> })}
            </span>
        </a>
    }
}
