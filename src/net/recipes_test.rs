use super::*;

#[test]
fn recipe_page_carries_aggregate_total() {
    let raw = r#"{
        "recipes": [
            {"id": "r1", "title": "Lentil Soup", "status": "published", "created_at": "2024-03-01T00:00:00Z"},
            {"id": "r2", "title": "Shiro", "status": "published", "created_at": "2024-02-01T00:00:00Z"}
        ],
        "recipes_aggregate": {"aggregate": {"count": 40}}
    }"#;
    let data: RecipesData = serde_json::from_str(raw).expect("listing data");
    let page = RecipePage::from(data);
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.total, 40);
    assert_eq!(page.items[0].title, "Lentil Soup");
}

#[test]
fn unknown_recipe_decodes_as_none() {
    let data: RecipeData = serde_json::from_str(r#"{"recipes_by_pk": null}"#).expect("detail data");
    assert!(data.recipes_by_pk.is_none());
}

#[test]
fn categories_flatten_counts() {
    let raw = r#"{
        "categories": [
            {"id": "c1", "name": "Soups", "slug": "soups",
             "recipes_aggregate": {"aggregate": {"count": 7}}},
            {"id": "c2", "name": "Breads", "slug": "breads",
             "recipes_aggregate": {"aggregate": {"count": 0}}}
        ]
    }"#;
    let data: CategoriesData = serde_json::from_str(raw).expect("categories data");
    let categories: Vec<Category> = data.categories.into_iter().map(Category::from).collect();
    assert_eq!(categories[0].recipe_count, 7);
    assert_eq!(categories[1].recipe_count, 0);
}

#[test]
fn toggle_wrappers_use_action_field_names() {
    let like: ToggleLikeData = serde_json::from_str(
        r#"{"toggleRecipeLike": {"success": true, "isLiked": false, "likesCount": 3}}"#,
    )
    .expect("like data");
    assert!(!like.toggle_recipe_like.is_liked);

    let bookmark: ToggleBookmarkData = serde_json::from_str(
        r#"{"toggleRecipeBookmark": {"success": true, "isBookmarked": true}}"#,
    )
    .expect("bookmark data");
    assert!(bookmark.toggle_recipe_bookmark.is_bookmarked);
}
