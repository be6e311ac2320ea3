use super::*;

#[test]
fn product_optional_fields_default() {
    let json = serde_json::json!({ "id": 1, "denominacion": "Gorra", "precioVenta": 3000 });
    let product: Product = serde_json::from_value(json).unwrap();
    assert!(product.category.is_none());
    assert!(!product.has_promotion);
    assert!((product.effective_price() - 3000.0).abs() < f64::EPSILON);
}

#[test]
fn promotional_price_ignored_without_promotion() {
    let json = serde_json::json!({
        "id": 2, "denominacion": "Campera", "precioVenta": 80000, "precioPromocional": 60000
    });
    let product: Product = serde_json::from_value(json).unwrap();
    assert!((product.effective_price() - 80000.0).abs() < f64::EPSILON);
}

#[test]
fn category_parent_is_optional() {
    let root: Category = serde_json::from_value(serde_json::json!({ "id": 1, "denominacion": "Ropa" })).unwrap();
    let child: Category =
        serde_json::from_value(serde_json::json!({ "id": 10, "denominacion": "Remeras", "categoriaPadreId": 1 })).unwrap();
    assert_eq!(root.parent_id, None);
    assert_eq!(child.parent_id, Some(1));
}

#[test]
fn facet_options_loaded_when_any_list_present() {
    assert!(!FacetOptions::default().is_loaded());
    let options = FacetOptions {
        sizes: vec![FacetOption { id: 1, denomination: "M".into() }],
        ..Default::default()
    };
    assert!(options.is_loaded());
}
