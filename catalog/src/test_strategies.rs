//! Proptest strategies shared by the property tests.

use proptest::prelude::*;

use crate::filter::{OrderBy, OrderDirection, ProductFilter, Sex};

/// Free text including blanks, padding and URL-reserved characters.
pub fn text() -> impl Strategy<Value = String> {
    "[ a-zA-Z0-9&=+%?#/áñ.-]{0,10}"
}

/// Any price a source could hand us, including negative and non-finite ones.
pub fn price() -> impl Strategy<Value = Option<f64>> {
    prop_oneof![
        Just(None),
        (0.0f64..1_000_000.0).prop_map(Some),
        any::<f64>().prop_map(Some),
    ]
}

/// Arbitrary, possibly non-normalized filters.
pub fn product_filter() -> impl Strategy<Value = ProductFilter> {
    let facets = (
        proptest::option::of(text()),
        prop::collection::vec(text(), 0..4),
        prop::collection::vec(text(), 0..4),
        prop::collection::vec(text(), 0..4),
    );
    let scalars = (
        proptest::option::of(prop::sample::select(Sex::ALL.to_vec())),
        price(),
        price(),
        proptest::option::of(any::<bool>()),
        proptest::option::of(prop::sample::select(OrderBy::ALL.to_vec())),
        proptest::option::of(prop::sample::select(OrderDirection::ALL.to_vec())),
    );
    (facets, scalars).prop_map(
        |((denomination, categories, colors, sizes), (sex, min_price, max_price, has_promotion, order_by, order_direction))| {
            ProductFilter {
                denomination,
                categories,
                colors,
                sizes,
                sex,
                min_price,
                max_price,
                has_promotion,
                order_by,
                order_direction,
            }
        },
    )
}
