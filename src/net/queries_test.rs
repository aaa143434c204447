use serde_json::json;

use super::*;

// =============================================================
// Where clause
// =============================================================

#[test]
fn where_defaults_to_published_only() {
    let clause = recipes_where(&RecipeFilters::default());
    assert_eq!(clause, json!({ "status": { "_eq": "published" } }));
}

#[test]
fn search_matches_title_or_description_case_insensitively() {
    let filters = RecipeFilters {
        search: Some("soup".to_owned()),
        ..RecipeFilters::default()
    };
    let clause = recipes_where(&filters);
    assert_eq!(
        clause["_or"],
        json!([
            { "title": { "_ilike": "%soup%" } },
            { "description": { "_ilike": "%soup%" } },
        ])
    );
    // The published gate stays in place alongside the search.
    assert_eq!(clause["status"], json!({ "_eq": "published" }));
}

#[test]
fn blank_search_is_ignored() {
    let filters = RecipeFilters {
        search: Some("   ".to_owned()),
        ..RecipeFilters::default()
    };
    assert!(recipes_where(&filters).get("_or").is_none());
}

#[test]
fn equality_filters_apply_when_set() {
    let filters = RecipeFilters {
        category_id: Some("c1".to_owned()),
        difficulty: Some("easy".to_owned()),
        cuisine_type: Some("ethiopian".to_owned()),
        ..RecipeFilters::default()
    };
    let clause = recipes_where(&filters);
    assert_eq!(clause["category_id"], json!({ "_eq": "c1" }));
    assert_eq!(clause["difficulty"], json!({ "_eq": "easy" }));
    assert_eq!(clause["cuisine_type"], json!({ "_eq": "ethiopian" }));
}

#[test]
fn max_prep_time_is_an_upper_bound() {
    let filters = RecipeFilters {
        max_prep_time: Some(30),
        ..RecipeFilters::default()
    };
    assert_eq!(recipes_where(&filters)["prep_time"], json!({ "_lte": 30 }));
}

// =============================================================
// Ordering
// =============================================================

#[test]
fn default_order_is_newest_first() {
    assert_eq!(recipes_order_by(None), json!([{ "created_at": "desc" }]));
}

#[test]
fn sort_key_splits_field_and_direction() {
    assert_eq!(recipes_order_by(Some("price_asc")), json!([{ "price": "asc" }]));
}

#[test]
fn sort_key_keeps_field_underscores() {
    assert_eq!(
        recipes_order_by(Some("total_time_desc")),
        json!([{ "total_time": "desc" }])
    );
}

#[test]
fn unknown_sort_direction_falls_back_to_default() {
    assert_eq!(
        recipes_order_by(Some("price_upward")),
        json!([{ "created_at": "desc" }])
    );
    assert_eq!(recipes_order_by(Some("price")), json!([{ "created_at": "desc" }]));
}

// =============================================================
// Variables
// =============================================================

#[test]
fn recipes_variables_default_pagination() {
    let variables = recipes_variables(&RecipeFilters::default());
    assert_eq!(variables["limit"], 12);
    assert_eq!(variables["offset"], 0);
}

#[test]
fn login_variables_carry_credentials_only() {
    let credentials = crate::net::types::Credentials {
        email: "a@b.com".to_owned(),
        password: "x".to_owned(),
        remember_me: true,
    };
    let variables = login_variables(&credentials);
    assert_eq!(variables, json!({ "input": { "email": "a@b.com", "password": "x" } }));
}

#[test]
fn signup_variables_default_bio_and_avatar_to_empty() {
    let input = crate::net::types::SignupInput {
        email: "a@b.com".to_owned(),
        username: "abebe".to_owned(),
        first_name: "Abebe".to_owned(),
        last_name: "Kebede".to_owned(),
        password: "secret123".to_owned(),
        bio: None,
        avatar: None,
    };
    let variables = signup_variables(&input);
    assert_eq!(variables["input"]["bio"], "");
    assert_eq!(variables["input"]["avatar"], "");
}

#[test]
fn recipe_insert_object_omits_absent_fields() {
    let recipe = crate::net::types::NewRecipe {
        title: "Shiro".to_owned(),
        prep_time: Some(15),
        ..crate::net::types::NewRecipe::default()
    };
    let object = recipe_insert_object(&recipe);
    assert_eq!(object["title"], "Shiro");
    assert_eq!(object["status"], "published");
    assert_eq!(object["prep_time"], 15);
    assert!(object.get("description").is_none());
    assert!(object.get("price").is_none());
}

#[test]
fn payment_variables_nest_recipe_and_amount() {
    let variables = payment_variables("r1", 149.5);
    assert_eq!(variables["input"]["recipe_id"], "r1");
    assert_eq!(variables["input"]["amount"], 149.5);
}
