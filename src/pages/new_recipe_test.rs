use super::*;

#[test]
fn build_new_recipe_requires_a_title() {
    assert_eq!(
        build_new_recipe("  ", "", "", "", "", "", "", "", ""),
        Err("Give your recipe a title.")
    );
}

#[test]
fn build_new_recipe_minimal_has_only_title() {
    let recipe = build_new_recipe("Shiro", "", "", "", "", "", "", "", "").expect("valid");
    assert_eq!(recipe.title, "Shiro");
    assert!(recipe.description.is_none());
    assert!(recipe.category_id.is_none());
    assert!(recipe.prep_time.is_none());
    assert!(recipe.price.is_none());
    assert!(recipe.featured_image.is_none());
}

#[test]
fn build_new_recipe_parses_numeric_fields() {
    let recipe = build_new_recipe(
        "Shiro",
        "A staple stew.",
        "c1",
        "easy",
        "ethiopian",
        "15",
        "25",
        "4",
        "149.50",
    )
    .expect("valid");
    assert_eq!(recipe.prep_time, Some(15));
    assert_eq!(recipe.cook_time, Some(25));
    assert_eq!(recipe.servings, Some(4));
    assert_eq!(recipe.price, Some(149.5));
}

#[test]
fn build_new_recipe_rejects_junk_numbers() {
    assert!(build_new_recipe("Shiro", "", "", "", "", "soon", "", "", "").is_err());
    assert!(build_new_recipe("Shiro", "", "", "", "", "", "", "", "cheap").is_err());
}

#[test]
fn parse_optional_count_rejects_negatives() {
    assert!(parse_optional_count("-5").is_err());
    assert_eq!(parse_optional_count("  "), Ok(None));
    assert_eq!(parse_optional_count("45"), Ok(Some(45)));
}

#[test]
fn parse_optional_price_rejects_negatives() {
    assert!(parse_optional_price("-1.00").is_err());
    assert_eq!(parse_optional_price(""), Ok(None));
    assert_eq!(parse_optional_price("12.5"), Ok(Some(12.5)));
}
