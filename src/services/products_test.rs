use std::time::Duration;

use super::*;
use crate::state::test_helpers::{MockApi, seeded_api, test_app_state};

// =========================================================================
// sync_from_query
// =========================================================================

#[tokio::test]
async fn empty_query_on_fresh_state_fetches_all_once() {
    let (state, api) = test_app_state(seeded_api());

    assert_eq!(sync_from_query(&state, "").await, ReconcileAction::FetchAll);
    assert_eq!(sync_from_query(&state, "?").await, ReconcileAction::Noop);

    assert_eq!(MockApi::calls(&api.full_calls), 1);
    assert_eq!(MockApi::calls(&api.filtered_calls), 0);
    assert_eq!(state.catalog.read().await.products().len(), 2);
}

#[tokio::test]
async fn filtered_query_on_first_load_fetches_filtered() {
    let (state, api) = test_app_state(seeded_api());

    let action = sync_from_query(&state, "?categorias=Calzado").await;
    assert!(matches!(action, ReconcileAction::ReplaceAndFetch(_)));
    assert_eq!(MockApi::calls(&api.full_calls), 0);
    assert_eq!(MockApi::calls(&api.filtered_calls), 1);

    let store = state.catalog.read().await;
    assert_eq!(store.filter().categories, vec!["Calzado".to_owned()]);
    assert_eq!(store.products().len(), 1);
    assert_eq!(store.products()[0].denomination, "Zapatilla");
}

#[tokio::test]
async fn reordered_query_does_not_refetch() {
    let (state, api) = test_app_state(seeded_api());

    sync_from_query(&state, "categorias=Calzado&categorias=Remeras").await;
    let action = sync_from_query(&state, "categorias=Remeras&categorias=Calzado&utm=x").await;

    assert_eq!(action, ReconcileAction::Noop);
    assert_eq!(MockApi::calls(&api.filtered_calls), 1);
}

#[tokio::test]
async fn clearing_query_returns_to_full_list() {
    let (state, api) = test_app_state(seeded_api());

    sync_from_query(&state, "categorias=Calzado").await;
    let action = sync_from_query(&state, "").await;

    assert_eq!(action, ReconcileAction::ReplaceAndFetch(ProductFilter::default()));
    assert_eq!(MockApi::calls(&api.full_calls), 1);
    assert_eq!(state.catalog.read().await.products().len(), 2);
}

#[tokio::test]
async fn fetch_error_is_stored_and_not_retried_automatically() {
    let (state, api) = test_app_state(MockApi { product_status: Some(502), ..seeded_api() });

    sync_from_query(&state, "").await;
    {
        let store = state.catalog.read().await;
        assert_eq!(store.error(), Some("request failed with status 502"));
        assert!(!store.is_loading());
    }

    assert_eq!(sync_from_query(&state, "").await, ReconcileAction::Noop);
    assert_eq!(MockApi::calls(&api.full_calls), 1);

    assert!(retry(&state).await);
    assert_eq!(MockApi::calls(&api.full_calls), 2);
}

// =========================================================================
// stale responses
// =========================================================================

#[tokio::test]
async fn slow_response_for_old_filter_is_discarded() {
    let api = seeded_api();
    // Single-category filters respond slowly.
    api.delays.lock().unwrap().insert(1, Duration::from_millis(80));
    let (state, api) = test_app_state(api);

    let slow_state = state.clone();
    let slow = tokio::spawn(async move { sync_from_query(&slow_state, "categorias=Calzado").await });

    tokio::time::sleep(Duration::from_millis(10)).await;
    sync_from_query(&state, "categorias=Calzado&categorias=Remeras").await;
    slow.await.unwrap();

    let store = state.catalog.read().await;
    assert_eq!(store.filter().categories.len(), 2);
    assert_eq!(store.products().len(), 2);
    assert!(!store.is_loading());
    assert_eq!(MockApi::calls(&api.filtered_calls), 2);
}

// =========================================================================
// apply_filter
// =========================================================================

#[tokio::test]
async fn apply_filter_returns_canonical_query() {
    let (state, _api) = test_app_state(seeded_api());
    let filter = ProductFilter {
        categories: vec!["Remeras".into(), "Calzado".into()],
        denomination: Some("  ".into()),
        ..Default::default()
    };

    let (query, action) = apply_filter(&state, &filter).await;
    assert_eq!(query, "categorias=Calzado&categorias=Remeras");
    assert!(matches!(action, ReconcileAction::ReplaceAndFetch(_)));

    let (_, again) = apply_filter(&state, &filter).await;
    assert_eq!(again, ReconcileAction::Noop);
}
