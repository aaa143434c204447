//! Display formatting for recipe metadata.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Render a minute count as `"45 min"` or `"1 hr 20 min"`.
pub fn format_minutes(minutes: i64) -> String {
    if minutes <= 0 {
        return "—".to_owned();
    }
    let hours = minutes / 60;
    let rest = minutes % 60;
    match (hours, rest) {
        (0, m) => format!("{m} min"),
        (h, 0) => format!("{h} hr"),
        (h, m) => format!("{h} hr {m} min"),
    }
}

/// Render a price; zero or absent means the recipe is free.
pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(p) if p > 0.0 => format!("{p:.2} ETB"),
        _ => "Free".to_owned(),
    }
}

/// Render an average rating as `"4.5"`, or a dash when unrated.
pub fn format_rating(rating: Option<f64>) -> String {
    match rating {
        Some(r) => format!("{r:.1}"),
        None => "—".to_owned(),
    }
}
