use super::*;
use crate::net::types::IngredientRef;

fn ingredient(amount: Option<f64>, unit: Option<&str>, name: &str, notes: Option<&str>) -> RecipeIngredient {
    RecipeIngredient {
        id: "i1".to_owned(),
        amount,
        unit: unit.map(str::to_owned),
        notes: notes.map(str::to_owned),
        sort_order: 0,
        ingredient: IngredientRef {
            id: "b1".to_owned(),
            name: name.to_owned(),
            category: None,
        },
    }
}

#[test]
fn ingredient_line_joins_amount_unit_and_name() {
    let line = ingredient_line(&ingredient(Some(2.0), Some("cups"), "flour", None));
    assert_eq!(line, "2 cups flour");
}

#[test]
fn ingredient_line_keeps_fractional_amounts() {
    let line = ingredient_line(&ingredient(Some(0.5), Some("tsp"), "salt", None));
    assert_eq!(line, "0.5 tsp salt");
}

#[test]
fn ingredient_line_appends_notes_in_parens() {
    let line = ingredient_line(&ingredient(Some(2.0), Some("cups"), "flour", Some("sifted")));
    assert_eq!(line, "2 cups flour (sifted)");
}

#[test]
fn ingredient_line_without_amount_is_just_the_name() {
    assert_eq!(ingredient_line(&ingredient(None, None, "salt", None)), "salt");
}

#[test]
fn nutrition_rows_skip_absent_values() {
    let nutrition = RecipeNutrition {
        id: "n1".to_owned(),
        calories: Some(320.0),
        protein: None,
        carbohydrates: Some(41.0),
        fat: None,
        fiber: None,
        sugar: None,
        sodium: None,
    };
    assert_eq!(nutrition_rows(&nutrition), vec![("Calories", 320.0), ("Carbohydrates", 41.0)]);
}

#[test]
fn purchase_amount_requires_positive_price() {
    let raw = r#"{"id":"r1","title":"Shiro","status":"published","created_at":"2024-01-01T00:00:00Z"}"#;
    let mut detail: RecipeDetail = serde_json::from_str(raw).expect("detail");
    assert!(purchase_amount(&detail).is_none());

    detail.price = Some(0.0);
    assert!(purchase_amount(&detail).is_none());

    detail.price = Some(149.5);
    assert_eq!(purchase_amount(&detail), Some(149.5));
}
