use super::*;

#[test]
fn profile_defaults_fill_reduced_signup_selection() {
    // The signup action only returns the identity fields.
    let raw = r#"{
        "id": "u1",
        "email": "a@b.com",
        "first_name": "Abebe",
        "last_name": "Kebede",
        "username": "abebe"
    }"#;
    let profile: Profile = serde_json::from_str(raw).expect("profile");
    assert!(profile.avatar.is_none());
    assert!(profile.bio.is_none());
    assert!(!profile.is_verified);
    assert!(profile.created_at.is_none());
}

#[test]
fn display_name_prefers_full_name_then_username() {
    let mut profile: Profile = serde_json::from_str(
        r#"{"id":"u1","email":"a@b.com","first_name":"Abebe","last_name":"Kebede","username":"abebe"}"#,
    )
    .expect("profile");
    assert_eq!(profile.display_name(), "Abebe Kebede");

    profile.first_name = String::new();
    profile.last_name = String::new();
    assert_eq!(profile.display_name(), "abebe");
}

#[test]
fn category_row_flattens_aggregate_count() {
    let raw = r#"{
        "id": "c1",
        "name": "Soups",
        "slug": "soups",
        "description": null,
        "image": null,
        "recipes_aggregate": {"aggregate": {"count": 7}}
    }"#;
    let row: CategoryRow = serde_json::from_str(raw).expect("category row");
    let category = Category::from(row);
    assert_eq!(category.recipe_count, 7);
    assert_eq!(category.slug, "soups");
}

#[test]
fn like_result_uses_camel_case_fields() {
    let raw = r#"{"success": true, "isLiked": true, "likesCount": 4}"#;
    let result: LikeResult = serde_json::from_str(raw).expect("like result");
    assert!(result.is_liked);
    assert_eq!(result.likes_count, 4);
}

#[test]
fn recipe_summary_tolerates_missing_optional_fields() {
    let raw = r#"{
        "id": "r1",
        "title": "Shiro",
        "status": "published",
        "created_at": "2024-01-01T00:00:00Z"
    }"#;
    let summary: RecipeSummary = serde_json::from_str(raw).expect("summary");
    assert_eq!(summary.likes_count, 0);
    assert!(summary.category.is_none());
    assert!(summary.price.is_none());
}

#[test]
fn recipe_detail_collections_default_empty() {
    let raw = r#"{
        "id": "r1",
        "title": "Shiro",
        "status": "published",
        "created_at": "2024-01-01T00:00:00Z"
    }"#;
    let detail: RecipeDetail = serde_json::from_str(raw).expect("detail");
    assert!(detail.images.is_empty());
    assert!(detail.ingredients.is_empty());
    assert!(detail.steps.is_empty());
    assert!(detail.reviews.is_empty());
    assert!(detail.nutrition.is_none());
}

#[test]
fn auth_payload_failure_carries_message_only() {
    let raw = r#"{"success": false, "message": "bad credentials"}"#;
    let payload: AuthPayload = serde_json::from_str(raw).expect("payload");
    assert!(!payload.success);
    assert_eq!(payload.message.as_deref(), Some("bad credentials"));
    assert!(payload.access_token.is_none());
    assert!(payload.user.is_none());
}
