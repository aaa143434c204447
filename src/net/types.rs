//! Wire DTOs for the gateway's query/mutation surface.
//!
//! DESIGN
//! ======
//! These types mirror the gateway's field selections exactly, so serde can
//! decode responses without any hand-written mapping. The client never
//! derives recipe data locally; everything here is a read-only projection
//! of remote truth.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Authenticated user profile, as returned by the login action and
/// persisted alongside the credential.
///
/// The signup action returns a reduced selection, so the optional fields
/// default when absent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Unique user identifier (UUID string).
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    /// Avatar image URL, if set.
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    /// Whether the account's email address has been verified.
    #[serde(default)]
    pub is_verified: bool,
    /// Account creation timestamp (ISO-8601 string).
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Profile {
    /// Display name for headers and review bylines.
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() { self.username.clone() } else { full.to_owned() }
    }
}

/// Login form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    /// Sets the remember-me marker locally; never sent to the backend.
    pub remember_me: bool,
}

/// Signup form input. Bio and avatar are optional and sent as empty
/// strings when absent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupInput {
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub bio: Option<String>,
    pub avatar: Option<String>,
}

/// Fields of a recipe being created. Only the title is required; the
/// insert object omits absent fields so backend defaults apply.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NewRecipe {
    pub title: String,
    pub description: Option<String>,
    pub category_id: Option<String>,
    pub difficulty: Option<String>,
    pub cuisine_type: Option<String>,
    pub prep_time: Option<i64>,
    pub cook_time: Option<i64>,
    pub servings: Option<i64>,
    pub price: Option<f64>,
    pub featured_image: Option<String>,
}

/// Result of the `login` action.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AuthPayload {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub user: Option<Profile>,
}

/// Result of the `signup` action. Signing up does not authenticate.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SignupPayload {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<Profile>,
}

/// Recipe author as embedded in listing and detail selections.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RecipeAuthor {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    #[serde(default)]
    pub avatar: Option<String>,
    /// Denormalized author recipe count; only selected on the detail query.
    #[serde(default)]
    pub recipe_count: Option<i64>,
}

impl RecipeAuthor {
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() { self.username.clone() } else { full.to_owned() }
    }
}

/// Category reference embedded in recipe rows.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CategoryRef {
    pub id: String,
    pub name: String,
    pub slug: String,
}

/// One row of the recipe listing.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RecipeSummary {
    /// Unique recipe identifier (UUID string).
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub featured_image: Option<String>,
    /// Preparation time in minutes.
    #[serde(default)]
    pub prep_time: Option<i64>,
    /// Cooking time in minutes.
    #[serde(default)]
    pub cook_time: Option<i64>,
    /// Total time in minutes, denormalized by the backend.
    #[serde(default)]
    pub total_time: Option<i64>,
    #[serde(default)]
    pub servings: Option<i64>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub cuisine_type: Option<String>,
    /// Purchase price; zero or absent means the recipe is free.
    #[serde(default)]
    pub price: Option<f64>,
    pub status: String,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub average_rating: Option<f64>,
    #[serde(default)]
    pub likes_count: i64,
    #[serde(default)]
    pub reviews_count: i64,
    #[serde(default)]
    pub category: Option<CategoryRef>,
    #[serde(default)]
    pub author: Option<RecipeAuthor>,
}

/// Gallery image attached to a recipe.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RecipeImage {
    pub id: String,
    pub image_url: String,
    #[serde(default)]
    pub alt_text: Option<String>,
    #[serde(default)]
    pub sort_order: i64,
}

/// Base ingredient referenced from a recipe line.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct IngredientRef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
}

/// One ingredient line of a recipe.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RecipeIngredient {
    pub id: String,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub sort_order: i64,
    pub ingredient: IngredientRef,
}

/// One preparation step of a recipe.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RecipeStep {
    pub id: String,
    pub step_number: i64,
    pub instruction: String,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Optional timer suggestion in minutes.
    #[serde(default)]
    pub timer_minutes: Option<i64>,
    /// Optional oven temperature.
    #[serde(default)]
    pub temperature: Option<i64>,
}

/// Per-serving nutrition facts.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RecipeNutrition {
    pub id: String,
    #[serde(default)]
    pub calories: Option<f64>,
    #[serde(default)]
    pub protein: Option<f64>,
    #[serde(default)]
    pub carbohydrates: Option<f64>,
    #[serde(default)]
    pub fat: Option<f64>,
    #[serde(default)]
    pub fiber: Option<f64>,
    #[serde(default)]
    pub sugar: Option<f64>,
    #[serde(default)]
    pub sodium: Option<f64>,
}

/// Image attached to a review.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ReviewImage {
    pub id: String,
    pub image_url: String,
}

/// Reader review; the detail query selects the ten most recent.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RecipeReview {
    pub id: String,
    pub rating: i64,
    #[serde(default)]
    pub comment: Option<String>,
    pub created_at: String,
    pub user: RecipeAuthor,
    #[serde(default)]
    pub images: Vec<ReviewImage>,
}

/// Full recipe as returned by the by-primary-key detail query.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RecipeDetail {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub featured_image: Option<String>,
    #[serde(default)]
    pub prep_time: Option<i64>,
    #[serde(default)]
    pub cook_time: Option<i64>,
    #[serde(default)]
    pub total_time: Option<i64>,
    #[serde(default)]
    pub servings: Option<i64>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub cuisine_type: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    pub status: String,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub average_rating: Option<f64>,
    #[serde(default)]
    pub likes_count: i64,
    #[serde(default)]
    pub reviews_count: i64,
    #[serde(default)]
    pub views_count: i64,
    #[serde(default)]
    pub category: Option<CategoryRef>,
    #[serde(default)]
    pub author: Option<RecipeAuthor>,
    #[serde(default)]
    pub images: Vec<RecipeImage>,
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredient>,
    #[serde(default)]
    pub steps: Vec<RecipeStep>,
    #[serde(default)]
    pub nutrition: Option<RecipeNutrition>,
    #[serde(default)]
    pub reviews: Vec<RecipeReview>,
}

/// Count aggregate sub-object as the gateway nests it.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CountAggregate {
    pub aggregate: CountBody,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CountBody {
    pub count: i64,
}

/// Browsable category with its recipe count flattened out of the
/// gateway's aggregate sub-object.
#[derive(Clone, Debug, PartialEq)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub recipe_count: i64,
}

/// Category row as the gateway returns it, before flattening.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CategoryRow {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    pub recipes_aggregate: CountAggregate,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            slug: row.slug,
            description: row.description,
            image: row.image,
            recipe_count: row.recipes_aggregate.aggregate.count,
        }
    }
}

/// Result of the like-toggle action.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeResult {
    pub success: bool,
    pub is_liked: bool,
    pub likes_count: i64,
}

/// Result of the bookmark-toggle action.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkResult {
    pub success: bool,
    pub is_bookmarked: bool,
}

/// Result of payment initialization; on success `checkout_url` points at
/// the provider's hosted checkout page.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PaymentResult {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub checkout_url: Option<String>,
}

/// Identification of a freshly inserted recipe.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CreatedRecipe {
    pub id: String,
    #[serde(default)]
    pub slug: Option<String>,
    pub title: String,
}

/// Body of a successful upload response. Only `url` is required; it is
/// relative and gets resolved against the configured API base.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct UploadResponse {
    pub url: String,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub size: Option<i64>,
}
