//! Recipe and category operations.
//!
//! DESIGN
//! ======
//! Every operation returns its result for the caller to assign into its
//! own reactive state. Nothing here writes shared state, so concurrent
//! fetches cannot clobber each other.

#[cfg(test)]
#[path = "recipes_test.rs"]
mod recipes_test;

use serde::Deserialize;
use serde_json::json;

use super::gateway::{Gateway, GatewayError};
use super::queries::{self, RecipeFilters};
use super::types::{
    BookmarkResult, Category, CategoryRow, CountAggregate, CreatedRecipe, LikeResult, NewRecipe,
    RecipeDetail, RecipeSummary,
};

/// One page of the recipe listing plus the total matching row count.
#[derive(Clone, Debug, PartialEq)]
pub struct RecipePage {
    pub items: Vec<RecipeSummary>,
    pub total: i64,
}

#[derive(Deserialize)]
struct RecipesData {
    recipes: Vec<RecipeSummary>,
    recipes_aggregate: CountAggregate,
}

impl From<RecipesData> for RecipePage {
    fn from(data: RecipesData) -> Self {
        Self {
            items: data.recipes,
            total: data.recipes_aggregate.aggregate.count,
        }
    }
}

#[derive(Deserialize)]
struct RecipeData {
    recipes_by_pk: Option<RecipeDetail>,
}

#[derive(Deserialize)]
struct CategoriesData {
    categories: Vec<CategoryRow>,
}

#[derive(Deserialize)]
struct InsertRecipeData {
    insert_recipes_one: CreatedRecipe,
}

#[derive(Deserialize)]
struct ToggleLikeData {
    #[serde(rename = "toggleRecipeLike")]
    toggle_recipe_like: LikeResult,
}

#[derive(Deserialize)]
struct ToggleBookmarkData {
    #[serde(rename = "toggleRecipeBookmark")]
    toggle_recipe_bookmark: BookmarkResult,
}

/// Fetch a filtered, ordered, paginated recipe page.
///
/// # Errors
///
/// Propagates gateway failures unchanged.
pub async fn fetch_recipes(
    gateway: &Gateway,
    filters: &RecipeFilters,
) -> Result<RecipePage, GatewayError> {
    let data: RecipesData = gateway
        .execute(queries::RECIPES_QUERY, queries::recipes_variables(filters))
        .await?;
    Ok(data.into())
}

/// Fetch one recipe with the full detail selection. `None` when the id is
/// unknown to the backend.
///
/// # Errors
///
/// Propagates gateway failures unchanged.
pub async fn fetch_recipe(
    gateway: &Gateway,
    id: &str,
) -> Result<Option<RecipeDetail>, GatewayError> {
    let data: RecipeData = gateway
        .execute(queries::RECIPE_QUERY, queries::recipe_variables(id))
        .await?;
    Ok(data.recipes_by_pk)
}

/// Fetch the active categories with their recipe counts flattened.
///
/// # Errors
///
/// Propagates gateway failures unchanged.
pub async fn fetch_categories(gateway: &Gateway) -> Result<Vec<Category>, GatewayError> {
    let data: CategoriesData = gateway.execute(queries::CATEGORIES_QUERY, json!({})).await?;
    Ok(data.categories.into_iter().map(Category::from).collect())
}

/// Insert a new recipe; returns its identity for navigation.
///
/// # Errors
///
/// Propagates gateway failures unchanged.
pub async fn create_recipe(
    gateway: &Gateway,
    recipe: &NewRecipe,
) -> Result<CreatedRecipe, GatewayError> {
    let data: InsertRecipeData = gateway
        .execute(
            queries::INSERT_RECIPE_MUTATION,
            queries::recipe_insert_variables(recipe),
        )
        .await?;
    Ok(data.insert_recipes_one)
}

/// Toggle the current user's like on a recipe.
///
/// # Errors
///
/// Propagates gateway failures unchanged.
pub async fn toggle_like(gateway: &Gateway, recipe_id: &str) -> Result<LikeResult, GatewayError> {
    let data: ToggleLikeData = gateway
        .execute(queries::TOGGLE_LIKE_MUTATION, queries::toggle_variables(recipe_id))
        .await?;
    Ok(data.toggle_recipe_like)
}

/// Toggle the current user's bookmark on a recipe.
///
/// # Errors
///
/// Propagates gateway failures unchanged.
pub async fn toggle_bookmark(
    gateway: &Gateway,
    recipe_id: &str,
) -> Result<BookmarkResult, GatewayError> {
    let data: ToggleBookmarkData = gateway
        .execute(
            queries::TOGGLE_BOOKMARK_MUTATION,
            queries::toggle_variables(recipe_id),
        )
        .await?;
    Ok(data.toggle_recipe_bookmark)
}
