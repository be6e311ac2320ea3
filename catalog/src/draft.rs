//! Filter panel draft: the user's unsubmitted edits.
//!
//! SYSTEM CONTEXT
//! ==============
//! The panel edits a draft seeded from the current filter. Nothing reaches
//! the store until the draft is submitted; submission produces a fresh
//! [`ProductFilter`] that the caller serializes into the URL.

#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

use std::collections::BTreeSet;

use crate::filter::{FilterError, OrderBy, OrderDirection, ProductFilter, Sex};
use crate::query::parse_price;

/// The multi-select facets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Facet {
    Category,
    Color,
    Size,
}

/// Editable panel state. Price inputs are kept as typed text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterDraft {
    pub denomination: String,
    pub categories: BTreeSet<String>,
    pub colors: BTreeSet<String>,
    pub sizes: BTreeSet<String>,
    pub sex: Option<Sex>,
    pub min_price: String,
    pub max_price: String,
    pub has_promotion: Option<bool>,
    pub ordering: Option<(OrderBy, OrderDirection)>,
}

impl FilterDraft {
    /// Seed a draft from the filter currently applied.
    #[must_use]
    pub fn from_filter(filter: &ProductFilter) -> Self {
        let filter = filter.normalize();
        Self {
            denomination: filter.denomination.clone().unwrap_or_default(),
            categories: filter.categories.iter().cloned().collect(),
            colors: filter.colors.iter().cloned().collect(),
            sizes: filter.sizes.iter().cloned().collect(),
            sex: filter.sex,
            min_price: filter.min_price.map(|p| p.to_string()).unwrap_or_default(),
            max_price: filter.max_price.map(|p| p.to_string()).unwrap_or_default(),
            has_promotion: filter.has_promotion,
            ordering: filter.ordering(),
        }
    }

    fn facet_mut(&mut self, facet: Facet) -> &mut BTreeSet<String> {
        match facet {
            Facet::Category => &mut self.categories,
            Facet::Color => &mut self.colors,
            Facet::Size => &mut self.sizes,
        }
    }

    #[must_use]
    pub fn is_selected(&self, facet: Facet, value: &str) -> bool {
        match facet {
            Facet::Category => self.categories.contains(value),
            Facet::Color => self.colors.contains(value),
            Facet::Size => self.sizes.contains(value),
        }
    }

    /// Add `value` to the facet, or remove it if already selected.
    pub fn toggle(&mut self, facet: Facet, value: &str) {
        let set = self.facet_mut(facet);
        if !set.remove(value) {
            set.insert(value.to_owned());
        }
    }

    /// Drop every selection.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Build the filter this draft describes.
    ///
    /// Unparsable price text is treated as no bound, matching how the URL is
    /// read.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvertedPriceRange`] when the minimum price
    /// exceeds the maximum.
    pub fn submit(&self) -> Result<ProductFilter, FilterError> {
        let (order_by, order_direction) = match self.ordering {
            Some((by, direction)) => (Some(by), Some(direction)),
            None => (None, None),
        };
        let filter = ProductFilter {
            denomination: Some(self.denomination.clone()),
            categories: self.categories.iter().cloned().collect(),
            colors: self.colors.iter().cloned().collect(),
            sizes: self.sizes.iter().cloned().collect(),
            sex: self.sex,
            min_price: parse_price(Some(&self.min_price)),
            max_price: parse_price(Some(&self.max_price)),
            has_promotion: self.has_promotion,
            order_by,
            order_direction,
        }
        .normalize();
        filter.validate_price_range()?;
        Ok(filter)
    }

    /// True when submitting would change `current`. Invalid drafts count as changed.
    #[must_use]
    pub fn differs_from(&self, current: &ProductFilter) -> bool {
        self.submit().map_or(true, |filter| filter != current.normalize())
    }
}
