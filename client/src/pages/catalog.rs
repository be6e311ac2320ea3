//! Catalog page: product grid driven by the URL query string.
//!
//! SYSTEM CONTEXT
//! ==============
//! An effect keyed on `location.search` reconciles the catalog store on
//! every URL change, including the first render and back/forward
//! navigation. Panel submissions navigate with a history replace so the
//! filter is shareable without flooding the history stack.

use catalog::FetchTicket;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::filter_panel::FilterPanel;
use crate::components::product_card::ProductCard;
use crate::state::catalog::CatalogState;
use crate::util::format::catalog_href;

#[component]
pub fn CatalogPage() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move || {
        let search = location.search.get();
        if let Some(ticket) = catalog.try_update(|s| s.sync_location(&search)).flatten() {
            spawn_products_fetch(catalog, ticket);
        }
    });

    // Facet options load once per session.
    Effect::new(move || {
        if !catalog.with_untracked(|s| s.facets.is_loaded()) {
            spawn_facets_fetch(catalog);
        }
    });

    let on_apply = Callback::new(move |search: String| {
        navigate(&catalog_href(&search), NavigateOptions { replace: true, ..Default::default() });
    });

    let on_retry = move |_| {
        if let Some(ticket) = catalog.try_update(|s| s.store.retry()) {
            spawn_products_fetch(catalog, ticket);
        }
    };

    let on_refresh = move |_| {
        let search = location.search.get_untracked();
        if let Some(ticket) = catalog.try_update(|s| s.refresh(&search)).flatten() {
            spawn_products_fetch(catalog, ticket);
        }
    };

    view! {
        <div class="catalog-page">
            <aside class="catalog-page__filters">
                <FilterPanel on_apply=on_apply/>
                {move || catalog.with(|s| s.facets_error.clone()).map(|e| view! { <p class="catalog-page__error">{e}</p> })}
            </aside>

            <section class="catalog-page__results">
                <button class="btn catalog-page__refresh" on:click=on_refresh>"Actualizar"</button>

                <Show when=move || catalog.with(|s| s.store.is_loading())>
                    <p class="catalog-page__loading">"Cargando productos..."</p>
                </Show>

                {move || {
                    catalog
                        .with(|s| s.store.error().map(str::to_owned))
                        .map(|e| {
                            view! {
                                <div class="catalog-page__error">
                                    <p>{e}</p>
                                    <button class="btn" on:click=on_retry>"Reintentar"</button>
                                </div>
                            }
                        })
                }}

                <Show when=move || catalog.with(|s| s.store.has_results() && s.store.products().is_empty())>
                    <p class="catalog-page__empty">"No hay productos para estos filtros."</p>
                </Show>

                <div class="catalog-page__grid">
                    <For
                        each=move || catalog.with(|s| s.store.products().to_vec())
                        key=|p| p.id
                        let:product
                    >
                        <ProductCard product=product/>
                    </For>
                </div>
            </section>
        </div>
    }
}

/// Run a product fetch and report it back to the store under its token.
fn spawn_products_fetch(catalog: RwSignal<CatalogState>, ticket: FetchTicket) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_products(&ticket).await;
            if let Err(e) = &result {
                log::warn!("product fetch {} failed: {e}", ticket.token);
            }
            let applied = catalog.try_update(|s| s.finish_fetch(ticket.token, result)).unwrap_or(false);
            if !applied {
                log::debug!("discarded stale product response {}", ticket.token);
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (catalog, ticket);
    }
}

fn spawn_facets_fetch(catalog: RwSignal<CatalogState>) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_facets().await;
            catalog.update(|s| s.set_facets(result));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = catalog;
    }
}
