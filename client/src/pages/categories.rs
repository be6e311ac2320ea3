//! Categories page: lazily expanded category tree.

use catalog::TreeRow;
use leptos::prelude::*;

use crate::state::categories::{CategoriesState, LoadRequest};

#[component]
pub fn CategoriesPage() -> impl IntoView {
    let categories = expect_context::<RwSignal<CategoriesState>>();

    Effect::new(move || {
        if let Some(request) = categories.try_update(CategoriesState::begin_roots).flatten() {
            spawn_children_fetch(categories, request);
        }
    });

    let roots_error = move || categories.with(|s| s.tree.error(None).map(str::to_owned));
    let roots_loading = move || categories.with(|s| s.tree.is_loading(None));

    view! {
        <div class="categories-page">
            <h1>"Categorías"</h1>
            <Show when=roots_loading>
                <p>"Cargando categorías..."</p>
            </Show>
            {move || {
                roots_error()
                    .map(|e| {
                        view! {
                            <p class="categories-page__error">
                                {e}
                                <button class="btn" on:click=move |_| reload(categories, None)>"Reintentar"</button>
                            </p>
                        }
                    })
            }}
            <ul class="category-tree">
                <For
                    each=move || categories.with(|s| s.tree.visible_rows())
                    key=|row| (row.category.id, row.depth, row.expanded, row.loading, row.error.clone())
                    let:row
                >
                    <CategoryRow row=row/>
                </For>
            </ul>
        </div>
    }
}

/// One line of the flattened tree.
#[component]
fn CategoryRow(row: TreeRow) -> impl IntoView {
    let categories = expect_context::<RwSignal<CategoriesState>>();
    let id = row.category.id;
    let indent = format!("padding-left: {}rem", row.depth);
    let marker = if row.expanded { "▾" } else { "▸" };

    let on_toggle = move |_| {
        if let Some(request) = categories.try_update(|s| s.toggle(id)).flatten() {
            spawn_children_fetch(categories, request);
        }
    };

    view! {
        <li class="category-tree__row" style=indent>
            <button class="category-tree__toggle" on:click=on_toggle>{marker}</button>
            <span>{row.category.denomination}</span>
            {row.loading.then(|| view! { <span class="category-tree__loading">"..."</span> })}
            {row
                .error
                .map(|e| {
                    view! {
                        <span class="category-tree__error">
                            {e}
                            <button class="btn" on:click=move |_| reload(categories, Some(id))>"Reintentar"</button>
                        </span>
                    }
                })}
        </li>
    }
}

fn reload(categories: RwSignal<CategoriesState>, parent: Option<catalog::CategoryId>) {
    if let Some(request) = categories.try_update(|s| s.reload(parent)).flatten() {
        spawn_children_fetch(categories, request);
    }
}

fn spawn_children_fetch(categories: RwSignal<CategoriesState>, request: LoadRequest) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_children(request.parent).await;
            if let Err(e) = &result {
                log::warn!("category load for {:?} failed: {e}", request.parent);
            }
            categories.update(|s| {
                s.finish_load(request, result);
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (categories, request);
    }
}
