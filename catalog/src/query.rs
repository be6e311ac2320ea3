//! URL query string codec for [`ProductFilter`].
//!
//! SYSTEM CONTEXT
//! ==============
//! The query string is the shareable, bookmarkable copy of the active filter.
//! The same encoding is sent to the backend's filter endpoint.
//!
//! ERROR HANDLING
//! ==============
//! Parsing never fails. Unknown keys are ignored and malformed values leave
//! their field unset.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use url::form_urlencoded;

use crate::filter::{OrderBy, OrderDirection, ProductFilter, Sex, normalize_price};

pub const KEY_DENOMINATION: &str = "denominacion";
pub const KEY_CATEGORIES: &str = "categorias";
pub const KEY_COLORS: &str = "colores";
pub const KEY_SIZES: &str = "talles";
pub const KEY_SEX: &str = "sexo";
pub const KEY_MIN_PRICE: &str = "minPrice";
pub const KEY_MAX_PRICE: &str = "maxPrice";
pub const KEY_HAS_PROMOTION: &str = "tienePromocion";
pub const KEY_ORDER_BY: &str = "orderBy";
pub const KEY_ORDER_DIRECTION: &str = "orderDirection";

/// Decoded `key=value` pairs with browser `URLSearchParams` lookup semantics.
struct QueryPairs(Vec<(String, String)>);

impl QueryPairs {
    fn parse(query: &str) -> Self {
        let raw = query.strip_prefix('?').unwrap_or(query);
        Self(form_urlencoded::parse(raw.as_bytes()).into_owned().collect())
    }

    /// First value for `key`; later repeats are ignored.
    fn first(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    fn all(&self, key: &str) -> Vec<String> {
        self.0
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
            .collect()
    }
}

/// Parse a URL query string (with or without the leading `?`) into a normalized filter.
#[must_use]
pub fn parse_query_string(query: &str) -> ProductFilter {
    let pairs = QueryPairs::parse(query);

    ProductFilter {
        denomination: pairs.first(KEY_DENOMINATION).map(str::to_owned),
        categories: pairs.all(KEY_CATEGORIES),
        colors: pairs.all(KEY_COLORS),
        sizes: pairs.all(KEY_SIZES),
        sex: pairs.first(KEY_SEX).and_then(Sex::from_wire),
        min_price: parse_price(pairs.first(KEY_MIN_PRICE)),
        max_price: parse_price(pairs.first(KEY_MAX_PRICE)),
        has_promotion: pairs.first(KEY_HAS_PROMOTION).and_then(parse_bool),
        order_by: pairs.first(KEY_ORDER_BY).and_then(OrderBy::from_wire),
        order_direction: pairs
            .first(KEY_ORDER_DIRECTION)
            .and_then(OrderDirection::from_wire),
    }
    .normalize()
}

/// Encode the non-empty fields of `filter` as a query string without a leading `?`.
///
/// Keys are emitted in a fixed order and set members one pair each, sorted,
/// so the output is stable for equal filters.
#[must_use]
pub fn serialize_query_string(filter: &ProductFilter) -> String {
    let filter = filter.normalize();
    let mut out = form_urlencoded::Serializer::new(String::new());

    if let Some(denomination) = &filter.denomination {
        out.append_pair(KEY_DENOMINATION, denomination);
    }
    for category in &filter.categories {
        out.append_pair(KEY_CATEGORIES, category);
    }
    for color in &filter.colors {
        out.append_pair(KEY_COLORS, color);
    }
    for size in &filter.sizes {
        out.append_pair(KEY_SIZES, size);
    }
    if let Some(sex) = filter.sex {
        out.append_pair(KEY_SEX, sex.as_wire());
    }
    if let Some(min) = filter.min_price {
        out.append_pair(KEY_MIN_PRICE, &min.to_string());
    }
    if let Some(max) = filter.max_price {
        out.append_pair(KEY_MAX_PRICE, &max.to_string());
    }
    if let Some(has_promotion) = filter.has_promotion {
        out.append_pair(KEY_HAS_PROMOTION, if has_promotion { "true" } else { "false" });
    }
    if let Some((by, direction)) = filter.ordering() {
        out.append_pair(KEY_ORDER_BY, by.as_wire());
        out.append_pair(KEY_ORDER_DIRECTION, direction.as_wire());
    }

    out.finish()
}

/// `location.search` form of the filter: empty, or the query prefixed with `?`.
#[must_use]
pub fn location_search(filter: &ProductFilter) -> String {
    let query = serialize_query_string(filter);
    if query.is_empty() { query } else { format!("?{query}") }
}

/// Decimal price; anything unparsable, negative or non-finite is unset.
pub(crate) fn parse_price(raw: Option<&str>) -> Option<f64> {
    normalize_price(raw?.trim().parse::<f64>().ok())
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}
