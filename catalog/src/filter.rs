//! Product filter model.
//!
//! DESIGN
//! ======
//! A `ProductFilter` may arrive from the URL, the store, or the filter panel,
//! each with its own notion of "nothing selected" (missing key, empty list,
//! blank string). `normalize` collapses all of them into one canonical value
//! so the reconciler can compare filters with plain structural equality.
//! Filters are values: callers build a new one and replace the old one.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use serde::{Deserialize, Serialize};

/// Validation failures raised when a filter panel draft is submitted.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FilterError {
    /// The lower price bound exceeds the upper one.
    #[error("minimum price {min} is greater than maximum price {max}")]
    InvertedPriceRange { min: f64, max: f64 },
}

/// Target audience facet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "MASCULINO")]
    Masculine,
    #[serde(rename = "FEMENINO")]
    Feminine,
    #[serde(rename = "UNISEX")]
    Unisex,
}

impl Sex {
    pub const ALL: [Self; 3] = [Self::Masculine, Self::Feminine, Self::Unisex];

    /// Wire value used in query strings and JSON bodies.
    #[must_use]
    pub fn as_wire(self) -> &'static str {
        match self {
            Self::Masculine => "MASCULINO",
            Self::Feminine => "FEMENINO",
            Self::Unisex => "UNISEX",
        }
    }

    #[must_use]
    pub fn from_wire(raw: &str) -> Option<Self> {
        match raw {
            "MASCULINO" => Some(Self::Masculine),
            "FEMENINO" => Some(Self::Feminine),
            "UNISEX" => Some(Self::Unisex),
            _ => None,
        }
    }
}

/// Sort key for the product list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderBy {
    #[serde(rename = "precioVenta")]
    Price,
    #[serde(rename = "denominacion")]
    Name,
}

impl OrderBy {
    pub const ALL: [Self; 2] = [Self::Price, Self::Name];

    #[must_use]
    pub fn as_wire(self) -> &'static str {
        match self {
            Self::Price => "precioVenta",
            Self::Name => "denominacion",
        }
    }

    #[must_use]
    pub fn from_wire(raw: &str) -> Option<Self> {
        match raw {
            "precioVenta" => Some(Self::Price),
            "denominacion" => Some(Self::Name),
            _ => None,
        }
    }
}

/// Sort direction for the product list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderDirection {
    Asc,
    Desc,
}

impl OrderDirection {
    pub const ALL: [Self; 2] = [Self::Asc, Self::Desc];

    #[must_use]
    pub fn as_wire(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    #[must_use]
    pub fn from_wire(raw: &str) -> Option<Self> {
        match raw {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }
}

/// Encode an ordering pair as a single select-box value, e.g. `precioVenta:desc`.
#[must_use]
pub fn order_key(by: OrderBy, direction: OrderDirection) -> String {
    format!("{}:{}", by.as_wire(), direction.as_wire())
}

/// Inverse of [`order_key`]. Anything malformed means "no ordering".
#[must_use]
pub fn parse_order_key(raw: &str) -> Option<(OrderBy, OrderDirection)> {
    let (by, direction) = raw.split_once(':')?;
    Some((OrderBy::from_wire(by)?, OrderDirection::from_wire(direction)?))
}

/// Structured product list query: facets, price range, promotion flag and ordering.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductFilter {
    /// Free-text name match.
    #[serde(rename = "denominacion", default, skip_serializing_if = "Option::is_none")]
    pub denomination: Option<String>,
    /// Selected category names. Order is not significant.
    #[serde(rename = "categorias", default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
    /// Selected color names. Order is not significant.
    #[serde(rename = "colores", default, skip_serializing_if = "Vec::is_empty")]
    pub colors: Vec<String>,
    /// Selected size names. Order is not significant.
    #[serde(rename = "talles", default, skip_serializing_if = "Vec::is_empty")]
    pub sizes: Vec<String>,
    #[serde(rename = "sexo", default, skip_serializing_if = "Option::is_none")]
    pub sex: Option<Sex>,
    #[serde(rename = "minPrice", default, skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    #[serde(rename = "maxPrice", default, skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    /// Tri-state: `None` applies no promotion constraint.
    #[serde(rename = "tienePromocion", default, skip_serializing_if = "Option::is_none")]
    pub has_promotion: Option<bool>,
    /// Only takes effect together with `order_direction`.
    #[serde(rename = "orderBy", default, skip_serializing_if = "Option::is_none")]
    pub order_by: Option<OrderBy>,
    #[serde(rename = "orderDirection", default, skip_serializing_if = "Option::is_none")]
    pub order_direction: Option<OrderDirection>,
}

impl ProductFilter {
    /// Canonical form used for every comparison.
    ///
    /// Trims text and drops blanks, sorts and dedups the set fields, drops
    /// prices that are negative or not finite, and drops a sort key or
    /// direction that arrives without its partner.
    #[must_use]
    pub fn normalize(&self) -> Self {
        let (order_by, order_direction) = match (self.order_by, self.order_direction) {
            (Some(by), Some(direction)) => (Some(by), Some(direction)),
            _ => (None, None),
        };

        Self {
            denomination: normalize_text(self.denomination.as_deref()),
            categories: normalize_set(&self.categories),
            colors: normalize_set(&self.colors),
            sizes: normalize_set(&self.sizes),
            sex: self.sex,
            min_price: normalize_price(self.min_price),
            max_price: normalize_price(self.max_price),
            has_promotion: self.has_promotion,
            order_by,
            order_direction,
        }
    }

    /// True when the filter constrains nothing after normalization.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.normalize() == Self::default()
    }

    /// Number of active selections, for a "Filters (n)" badge. Ordering is not a filter.
    #[must_use]
    pub fn active_facet_count(&self) -> usize {
        let f = self.normalize();
        usize::from(f.denomination.is_some())
            + f.categories.len()
            + f.colors.len()
            + f.sizes.len()
            + usize::from(f.sex.is_some())
            + usize::from(f.min_price.is_some() || f.max_price.is_some())
            + usize::from(f.has_promotion.is_some())
    }

    /// The effective ordering pair, if both halves are present.
    #[must_use]
    pub fn ordering(&self) -> Option<(OrderBy, OrderDirection)> {
        self.order_by.zip(self.order_direction)
    }

    /// Reject an inverted price range.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvertedPriceRange`] when both bounds are set
    /// and `min_price > max_price`.
    pub fn validate_price_range(&self) -> Result<(), FilterError> {
        match (normalize_price(self.min_price), normalize_price(self.max_price)) {
            (Some(min), Some(max)) if min > max => Err(FilterError::InvertedPriceRange { min, max }),
            _ => Ok(()),
        }
    }
}

fn normalize_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
}

fn normalize_set(values: &[String]) -> Vec<String> {
    let mut out: Vec<String> = values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
        .collect();
    out.sort();
    out.dedup();
    out
}

/// Prices are non-negative and finite; `-0.0` folds into `0.0`.
pub(crate) fn normalize_price(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v >= 0.0).map(f64::abs)
}
