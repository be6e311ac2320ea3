use super::*;
use catalog::parse_query_string;

#[test]
fn filtered_products_path_without_filter() {
    assert_eq!(filtered_products_path(&ProductFilter::default()), "/productos/filtrar");
}

#[test]
fn filtered_products_path_encodes_filter() {
    let filter = parse_query_string("talles=M&categorias=Calzado");
    assert_eq!(filtered_products_path(&filter), "/productos/filtrar?categorias=Calzado&talles=M");
}

#[test]
fn subcategories_path_formats_id() {
    assert_eq!(subcategories_path(12), "/categorias/12/subcategorias");
}

#[test]
fn response_error_message_names_status() {
    let err = ApiError::Response { status: 503, body: "down".into() };
    assert_eq!(err.to_string(), "request failed with status 503");
}
