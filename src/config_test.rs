use std::collections::HashMap;

use super::*;

fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn from_lookup_defaults() {
    let cfg = StorefrontConfig::from_lookup(vars(&[])).unwrap();
    assert_eq!(cfg, StorefrontConfig::default());
    assert_eq!(cfg.api_url, DEFAULT_API_URL);
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = StorefrontConfig::from_lookup(vars(&[
        ("STOREFRONT_API_URL", "https://shop.example.test/api/"),
        ("STOREFRONT_REQUEST_TIMEOUT_SECS", "42"),
        ("STOREFRONT_CONNECT_TIMEOUT_SECS", " 7 "),
    ]))
    .unwrap();
    assert_eq!(cfg.api_url, "https://shop.example.test/api");
    assert_eq!(cfg.timeouts, Timeouts { request_secs: 42, connect_secs: 7 });
}

#[test]
fn from_lookup_blank_url_uses_default() {
    let cfg = StorefrontConfig::from_lookup(vars(&[("STOREFRONT_API_URL", "  ")])).unwrap();
    assert_eq!(cfg.api_url, DEFAULT_API_URL);
}

#[test]
fn from_lookup_rejects_non_numeric_timeout() {
    let err = StorefrontConfig::from_lookup(vars(&[("STOREFRONT_REQUEST_TIMEOUT_SECS", "soon")])).unwrap_err();
    assert!(err.to_string().contains("STOREFRONT_REQUEST_TIMEOUT_SECS"));
}

#[test]
fn from_lookup_rejects_zero_timeout() {
    let err = StorefrontConfig::from_lookup(vars(&[("STOREFRONT_CONNECT_TIMEOUT_SECS", "0")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { var: "STOREFRONT_CONNECT_TIMEOUT_SECS", .. }));
}

#[test]
fn with_api_url_trims_trailing_slash() {
    let cfg = StorefrontConfig::default().with_api_url("http://localhost:9000///");
    assert_eq!(cfg.api_url, "http://localhost:9000");
}
