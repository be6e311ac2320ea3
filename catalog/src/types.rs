//! REST payload types shared by the native and browser clients.
//!
//! Field names on the wire follow the backend (Spanish, camelCase).

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::filter::Sex;

/// A product as returned by the catalog endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    #[serde(rename = "denominacion")]
    pub denomination: String,
    #[serde(rename = "precioVenta")]
    pub sale_price: f64,
    #[serde(rename = "categoria", default)]
    pub category: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(rename = "talle", default)]
    pub size: Option<String>,
    #[serde(rename = "sexo", default)]
    pub sex: Option<Sex>,
    #[serde(rename = "tienePromocion", default)]
    pub has_promotion: bool,
    #[serde(rename = "precioPromocional", default)]
    pub promotional_price: Option<f64>,
    #[serde(rename = "imagen", default)]
    pub image_url: Option<String>,
}

impl Product {
    /// Price the customer pays: the promotional price while a promotion is active.
    #[must_use]
    pub fn effective_price(&self) -> f64 {
        match self.promotional_price {
            Some(price) if self.has_promotion => price,
            _ => self.sale_price,
        }
    }
}

/// A node of the category hierarchy. Roots have no parent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "denominacion")]
    pub denomination: String,
    #[serde(rename = "categoriaPadreId", default)]
    pub parent_id: Option<i64>,
}

/// A selectable color or size.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetOption {
    pub id: i64,
    #[serde(rename = "denominacion")]
    pub denomination: String,
}

/// Option lists offered by the filter panel.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FacetOptions {
    pub categories: Vec<Category>,
    pub colors: Vec<FacetOption>,
    pub sizes: Vec<FacetOption>,
}

impl FacetOptions {
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        !(self.categories.is_empty() && self.colors.is_empty() && self.sizes.is_empty())
    }
}
