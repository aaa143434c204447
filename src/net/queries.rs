//! GraphQL documents and variable builders.
//!
//! DESIGN
//! ======
//! Documents are fixed selection sets; everything request-specific flows
//! through the variable builders below, which are pure functions so the
//! filter and ordering policy can be unit-tested without a browser.

#[cfg(test)]
#[path = "queries_test.rs"]
mod queries_test;

use serde_json::{Value, json};

use super::types::{Credentials, NewRecipe, SignupInput};

/// Default recipe listing page size.
pub const DEFAULT_PAGE_SIZE: i64 = 12;

pub const LOGIN_MUTATION: &str = "\
mutation Login($input: LoginInput!) {
  login(input: $input) {
    success
    message
    access_token
    refresh_token
    user {
      id
      email
      first_name
      last_name
      username
      avatar
      bio
      is_verified
      created_at
    }
  }
}";

pub const SIGNUP_MUTATION: &str = "\
mutation Signup($input: SignupInput!) {
  signup(input: $input) {
    success
    message
    user {
      id
      email
      first_name
      last_name
      username
    }
  }
}";

pub const RECIPES_QUERY: &str = "\
query GetRecipes($where: recipes_bool_exp, $orderBy: [recipes_order_by!], $limit: Int, $offset: Int) {
  recipes(where: $where, order_by: $orderBy, limit: $limit, offset: $offset) {
    id
    title
    description
    featured_image
    prep_time
    cook_time
    total_time
    servings
    difficulty
    cuisine_type
    price
    status
    created_at
    updated_at
    average_rating
    likes_count
    reviews_count
    category {
      id
      name
      slug
    }
    author {
      id
      first_name
      last_name
      username
      avatar
    }
  }
  recipes_aggregate(where: $where) {
    aggregate {
      count
    }
  }
}";

pub const RECIPE_QUERY: &str = "\
query GetRecipe($id: uuid!) {
  recipes_by_pk(id: $id) {
    id
    title
    slug
    description
    featured_image
    prep_time
    cook_time
    total_time
    servings
    difficulty
    cuisine_type
    price
    status
    created_at
    updated_at
    average_rating
    likes_count
    reviews_count
    views_count
    category {
      id
      name
      slug
    }
    author {
      id
      first_name
      last_name
      username
      avatar
      recipe_count
    }
    images {
      id
      image_url
      alt_text
      sort_order
    }
    ingredients {
      id
      amount
      unit
      notes
      sort_order
      ingredient {
        id
        name
        category
      }
    }
    steps {
      id
      step_number
      instruction
      image_url
      timer_minutes
      temperature
    }
    nutrition {
      id
      calories
      protein
      carbohydrates
      fat
      fiber
      sugar
      sodium
    }
    reviews(order_by: { created_at: desc }, limit: 10) {
      id
      rating
      comment
      created_at
      user {
        id
        first_name
        last_name
        username
        avatar
      }
      images {
        id
        image_url
      }
    }
  }
}";

pub const CATEGORIES_QUERY: &str = "\
query GetCategories {
  categories(where: { is_active: { _eq: true } }) {
    id
    name
    slug
    description
    image
    recipes_aggregate {
      aggregate {
        count
      }
    }
  }
}";

pub const INSERT_RECIPE_MUTATION: &str = "\
mutation CreateRecipe($recipe: recipes_insert_input!) {
  insert_recipes_one(object: $recipe) {
    id
    slug
    title
  }
}";

pub const TOGGLE_LIKE_MUTATION: &str = "\
mutation ToggleLike($recipeId: uuid!) {
  toggleRecipeLike(recipeId: $recipeId) {
    success
    isLiked
    likesCount
  }
}";

pub const TOGGLE_BOOKMARK_MUTATION: &str = "\
mutation ToggleBookmark($recipeId: uuid!) {
  toggleRecipeBookmark(recipeId: $recipeId) {
    success
    isBookmarked
  }
}";

pub const INITIALIZE_PAYMENT_MUTATION: &str = "\
mutation InitializePayment($input: PaymentInput!) {
  initializePayment(input: $input) {
    success
    message
    checkout_url
  }
}";

/// Listing filters. Defaults list the first page of published recipes,
/// newest first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecipeFilters {
    /// Case-insensitive substring match on title or description.
    pub search: Option<String>,
    pub category_id: Option<String>,
    pub difficulty: Option<String>,
    pub cuisine_type: Option<String>,
    /// Upper bound on preparation minutes.
    pub max_prep_time: Option<i64>,
    /// `field_direction` sort key, e.g. `price_asc`. Unset means newest
    /// first.
    pub sort_by: Option<String>,
    pub limit: i64,
    pub offset: i64,
}

impl Default for RecipeFilters {
    fn default() -> Self {
        Self {
            search: None,
            category_id: None,
            difficulty: None,
            cuisine_type: None,
            max_prep_time: None,
            sort_by: None,
            limit: DEFAULT_PAGE_SIZE,
            offset: 0,
        }
    }
}

/// Boolean expression for the recipe listing. Only published recipes are
/// ever listed; the optional filters narrow further.
pub fn recipes_where(filters: &RecipeFilters) -> Value {
    let mut clause = json!({ "status": { "_eq": "published" } });
    if let Some(search) = normalized(&filters.search) {
        let pattern = format!("%{search}%");
        clause["_or"] = json!([
            { "title": { "_ilike": pattern } },
            { "description": { "_ilike": pattern } },
        ]);
    }
    if let Some(category_id) = normalized(&filters.category_id) {
        clause["category_id"] = json!({ "_eq": category_id });
    }
    if let Some(difficulty) = normalized(&filters.difficulty) {
        clause["difficulty"] = json!({ "_eq": difficulty });
    }
    if let Some(cuisine) = normalized(&filters.cuisine_type) {
        clause["cuisine_type"] = json!({ "_eq": cuisine });
    }
    if let Some(max) = filters.max_prep_time {
        clause["prep_time"] = json!({ "_lte": max });
    }
    clause
}

/// Ordering for the recipe listing: the parsed sort key, or newest first.
pub fn recipes_order_by(sort_by: Option<&str>) -> Value {
    if let Some((field, direction)) = sort_by.and_then(split_sort_key) {
        let mut ordering = serde_json::Map::new();
        ordering.insert(field, Value::String(direction));
        return Value::Array(vec![Value::Object(ordering)]);
    }
    json!([{ "created_at": "desc" }])
}

/// Split a `field_direction` sort key on its last underscore, so fields
/// like `total_time` keep their own underscores. Unknown directions fall
/// back to the default ordering.
fn split_sort_key(key: &str) -> Option<(String, String)> {
    let (field, direction) = key.rsplit_once('_')?;
    let direction = direction.to_ascii_lowercase();
    if field.is_empty() || !matches!(direction.as_str(), "asc" | "desc") {
        return None;
    }
    Some((field.to_owned(), direction))
}

fn normalized(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

pub fn recipes_variables(filters: &RecipeFilters) -> Value {
    json!({
        "where": recipes_where(filters),
        "orderBy": recipes_order_by(filters.sort_by.as_deref()),
        "limit": filters.limit,
        "offset": filters.offset,
    })
}

pub fn recipe_variables(id: &str) -> Value {
    json!({ "id": id })
}

pub fn login_variables(credentials: &Credentials) -> Value {
    json!({
        "input": {
            "email": credentials.email,
            "password": credentials.password,
        }
    })
}

pub fn signup_variables(input: &SignupInput) -> Value {
    json!({
        "input": {
            "email": input.email,
            "username": input.username,
            "first_name": input.first_name,
            "last_name": input.last_name,
            "password": input.password,
            "bio": input.bio.clone().unwrap_or_default(),
            "avatar": input.avatar.clone().unwrap_or_default(),
        }
    })
}

/// Insert object for recipe creation. Absent optional fields are omitted
/// so backend column defaults apply. Created recipes are published
/// directly; the listing only ever shows published rows.
pub fn recipe_insert_object(recipe: &NewRecipe) -> Value {
    let mut object = serde_json::Map::new();
    object.insert("title".to_owned(), Value::String(recipe.title.clone()));
    object.insert("status".to_owned(), Value::String("published".to_owned()));
    insert_string(&mut object, "description", &recipe.description);
    insert_string(&mut object, "category_id", &recipe.category_id);
    insert_string(&mut object, "difficulty", &recipe.difficulty);
    insert_string(&mut object, "cuisine_type", &recipe.cuisine_type);
    insert_string(&mut object, "featured_image", &recipe.featured_image);
    if let Some(prep) = recipe.prep_time {
        object.insert("prep_time".to_owned(), json!(prep));
    }
    if let Some(cook) = recipe.cook_time {
        object.insert("cook_time".to_owned(), json!(cook));
    }
    if let Some(servings) = recipe.servings {
        object.insert("servings".to_owned(), json!(servings));
    }
    if let Some(price) = recipe.price {
        object.insert("price".to_owned(), json!(price));
    }
    Value::Object(object)
}

fn insert_string(object: &mut serde_json::Map<String, Value>, key: &str, value: &Option<String>) {
    if let Some(value) = value.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        object.insert(key.to_owned(), Value::String(value.to_owned()));
    }
}

pub fn recipe_insert_variables(recipe: &NewRecipe) -> Value {
    json!({ "recipe": recipe_insert_object(recipe) })
}

pub fn toggle_variables(recipe_id: &str) -> Value {
    json!({ "recipeId": recipe_id })
}

pub fn payment_variables(recipe_id: &str, amount: f64) -> Value {
    json!({
        "input": {
            "recipe_id": recipe_id,
            "amount": amount,
        }
    })
}
