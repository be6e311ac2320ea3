use super::*;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_owned()).collect()
}

// =============================================================
// parse_query_string
// =============================================================

#[test]
fn parse_empty_query_is_empty_filter() {
    assert_eq!(parse_query_string(""), ProductFilter::default());
    assert_eq!(parse_query_string("?"), ProductFilter::default());
}

#[test]
fn parse_scenario_query() {
    let filter = parse_query_string("?categorias=Calzado&minPrice=1000&orderBy=precioVenta&orderDirection=desc");
    assert_eq!(
        filter,
        ProductFilter {
            categories: strings(&["Calzado"]),
            min_price: Some(1000.0),
            order_by: Some(OrderBy::Price),
            order_direction: Some(OrderDirection::Desc),
            ..Default::default()
        }
    );
}

#[test]
fn parse_reads_repeated_keys() {
    let filter = parse_query_string("categorias=b&colores=rojo&categorias=a&talles=M&talles=L");
    assert_eq!(filter.categories, strings(&["a", "b"]));
    assert_eq!(filter.colors, strings(&["rojo"]));
    assert_eq!(filter.sizes, strings(&["L", "M"]));
}

#[test]
fn parse_ignores_unknown_keys() {
    let filter = parse_query_string("page=3&utm_source=mail&denominacion=buzo");
    assert_eq!(filter, ProductFilter { denomination: Some("buzo".into()), ..Default::default() });
}

#[test]
fn parse_decodes_plus_and_percent_escapes() {
    let filter = parse_query_string("denominacion=remera+lisa&categorias=Ropa%20Interior");
    assert_eq!(filter.denomination.as_deref(), Some("remera lisa"));
    assert_eq!(filter.categories, strings(&["Ropa Interior"]));
}

#[test]
fn parse_single_valued_key_uses_first_occurrence() {
    let filter = parse_query_string("sexo=FEMENINO&sexo=UNISEX");
    assert_eq!(filter.sex, Some(Sex::Feminine));
}

#[test]
fn parse_invalid_prices_are_unset() {
    for raw in ["abc", "", "NaN", "inf", "-10", "12abc"] {
        let filter = parse_query_string(&format!("minPrice={raw}&maxPrice={raw}"));
        assert!(filter.min_price.is_none(), "minPrice={raw}");
        assert!(filter.max_price.is_none(), "maxPrice={raw}");
    }
}

#[test]
fn parse_decimal_prices() {
    let filter = parse_query_string("minPrice=10.5&maxPrice=%2099.99");
    assert_eq!(filter.min_price, Some(10.5));
    assert_eq!(filter.max_price, Some(99.99));
}

#[test]
fn parse_promotion_only_accepts_literals() {
    assert_eq!(parse_query_string("tienePromocion=true").has_promotion, Some(true));
    assert_eq!(parse_query_string("tienePromocion=false").has_promotion, Some(false));
    assert_eq!(parse_query_string("tienePromocion=TRUE").has_promotion, None);
    assert_eq!(parse_query_string("tienePromocion=1").has_promotion, None);
}

#[test]
fn parse_unknown_enum_values_are_unset() {
    let filter = parse_query_string("sexo=otro&orderBy=stock&orderDirection=up");
    assert!(filter.sex.is_none());
    assert!(filter.order_by.is_none());
    assert!(filter.order_direction.is_none());
}

#[test]
fn parse_drops_order_without_direction() {
    let filter = parse_query_string("orderBy=denominacion");
    assert!(filter.is_empty());
}

// =============================================================
// serialize_query_string
// =============================================================

#[test]
fn serialize_empty_filter_is_empty_string() {
    assert_eq!(serialize_query_string(&ProductFilter::default()), "");
    assert_eq!(location_search(&ProductFilter::default()), "");
}

#[test]
fn serialize_scenario_filter() {
    let filter = ProductFilter {
        categories: strings(&["Calzado"]),
        min_price: Some(1000.0),
        order_by: Some(OrderBy::Price),
        order_direction: Some(OrderDirection::Desc),
        ..Default::default()
    };
    assert_eq!(
        serialize_query_string(&filter),
        "categorias=Calzado&minPrice=1000&orderBy=precioVenta&orderDirection=desc"
    );
}

#[test]
fn serialize_emits_one_pair_per_member_sorted() {
    let filter = ProductFilter { colors: strings(&["verde", "azul"]), ..Default::default() };
    assert_eq!(serialize_query_string(&filter), "colores=azul&colores=verde");
}

#[test]
fn serialize_skips_empty_fields() {
    let filter = ProductFilter {
        denomination: Some("  ".into()),
        sizes: vec![String::new()],
        has_promotion: Some(false),
        order_direction: Some(OrderDirection::Asc),
        ..Default::default()
    };
    assert_eq!(serialize_query_string(&filter), "tienePromocion=false");
}

#[test]
fn serialize_encodes_spaces_and_reserved_characters() {
    let filter = ProductFilter { denomination: Some("jean & co".into()), ..Default::default() };
    assert_eq!(serialize_query_string(&filter), "denominacion=jean+%26+co");
}

#[test]
fn location_search_prefixes_question_mark() {
    let filter = ProductFilter { sex: Some(Sex::Unisex), ..Default::default() };
    assert_eq!(location_search(&filter), "?sexo=UNISEX");
}

// =============================================================
// round trip
// =============================================================

#[test]
fn round_trip_preserves_normalized_filters() {
    let filters = [
        ProductFilter::default(),
        ProductFilter {
            denomination: Some("remera lisa 100%".into()),
            categories: strings(&["Remeras", "Calzado"]),
            colors: strings(&["azul marino"]),
            sizes: strings(&["XL", "M"]),
            sex: Some(Sex::Masculine),
            min_price: Some(0.0),
            max_price: Some(12_345.67),
            has_promotion: Some(true),
            order_by: Some(OrderBy::Name),
            order_direction: Some(OrderDirection::Asc),
        },
        ProductFilter { max_price: Some(0.1), has_promotion: Some(false), ..Default::default() },
    ];
    for filter in filters {
        let normalized = filter.normalize();
        assert_eq!(parse_query_string(&serialize_query_string(&normalized)), normalized);
    }
}

#[test]
fn scenario_query_serializes_to_equivalent_query() {
    let original = "?orderDirection=desc&minPrice=1000&orderBy=precioVenta&categorias=Calzado";
    let reparsed = parse_query_string(&serialize_query_string(&parse_query_string(original)));
    assert_eq!(reparsed, parse_query_string(original));
}

// =============================================================
// properties
// =============================================================

proptest::proptest! {
    #[test]
    fn round_trip_holds_for_any_filter(filter in crate::test_strategies::product_filter()) {
        let reparsed = parse_query_string(&serialize_query_string(&filter));
        proptest::prop_assert_eq!(reparsed, filter.normalize());
    }

    #[test]
    fn parse_accepts_any_input(query in proptest::prelude::any::<String>()) {
        let filter = parse_query_string(&query);
        proptest::prop_assert_eq!(filter.normalize(), filter);
    }
}
