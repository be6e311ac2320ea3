//! Display helpers for prices, badges and catalog links.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use catalog::{OrderBy, OrderDirection, Sex};

/// Format a price the way the storefront shows it: `$1.234,50`.
pub fn format_price(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int.len() + int.len() / 3);
    for (i, ch) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}${grouped},{frac}")
}

/// Label for the filter panel toggle, with the active facet count when non-zero.
pub fn filters_label(active: usize) -> String {
    if active == 0 { "Filtros".to_owned() } else { format!("Filtros ({active})") }
}

/// Catalog route for a `location.search` value (empty or starting with `?`).
pub fn catalog_href(search: &str) -> String {
    format!("/{search}")
}

/// Display name of an audience option.
pub fn sex_label(sex: Sex) -> &'static str {
    match sex {
        Sex::Masculine => "Hombre",
        Sex::Feminine => "Mujer",
        Sex::Unisex => "Unisex",
    }
}

/// Display name of an ordering choice.
pub fn ordering_label(by: OrderBy, direction: OrderDirection) -> &'static str {
    match (by, direction) {
        (OrderBy::Price, OrderDirection::Asc) => "Menor precio",
        (OrderBy::Price, OrderDirection::Desc) => "Mayor precio",
        (OrderBy::Name, OrderDirection::Asc) => "Nombre A-Z",
        (OrderBy::Name, OrderDirection::Desc) => "Nombre Z-A",
    }
}

/// Select-box value for the tri-state promotion filter.
pub fn promotion_choice(value: Option<bool>) -> &'static str {
    match value {
        Some(true) => "true",
        Some(false) => "false",
        None => "",
    }
}

/// Inverse of [`promotion_choice`]; anything else means "any".
pub fn parse_promotion_choice(raw: &str) -> Option<bool> {
    match raw {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}
