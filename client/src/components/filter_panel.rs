//! Filter panel: edits the draft and submits it as a new URL.
//!
//! The panel never touches the product store. Submitting produces a location
//! search which the owner writes into the URL; the catalog page reconciles
//! from there.

use catalog::filter::{order_key, parse_order_key};
use catalog::{Facet, OrderBy, OrderDirection, Sex};
use leptos::prelude::*;

use crate::state::catalog::CatalogState;
use crate::util::format::{filters_label, ordering_label, parse_promotion_choice, promotion_choice, sex_label};

/// Filter panel bound to the catalog context. `on_apply` receives the new location search.
#[component]
pub fn FilterPanel(on_apply: Callback<String>) -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();

    let category_values = Signal::derive(move || {
        catalog.with(|s| s.facets.categories.iter().map(|c| c.denomination.clone()).collect::<Vec<_>>())
    });
    let color_values =
        Signal::derive(move || catalog.with(|s| s.facets.colors.iter().map(|c| c.denomination.clone()).collect::<Vec<_>>()));
    let size_values =
        Signal::derive(move || catalog.with(|s| s.facets.sizes.iter().map(|c| c.denomination.clone()).collect::<Vec<_>>()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(search) = catalog.try_update(CatalogState::submit_draft).flatten() {
            on_apply.run(search);
        }
    };
    let on_clear = move |_| {
        if let Some(search) = catalog.try_update(CatalogState::clear_filters) {
            on_apply.run(search);
        }
    };

    let title = move || catalog.with(|s| filters_label(s.store.filter().active_facet_count()));

    view! {
        <form class="filter-panel" on:submit=on_submit>
            <h2 class="filter-panel__title">{title}</h2>

            <label class="filter-panel__field">
                "Buscar"
                <input
                    type="text"
                    prop:value=move || catalog.with(|s| s.draft.denomination.clone())
                    on:input=move |ev| catalog.update(|s| s.draft.denomination = event_target_value(&ev))
                />
            </label>

            <FacetGroup facet=Facet::Category title="Categorías" values=category_values/>
            <FacetGroup facet=Facet::Color title="Colores" values=color_values/>
            <FacetGroup facet=Facet::Size title="Talles" values=size_values/>

            <label class="filter-panel__field">
                "Sexo"
                <select on:change=move |ev| {
                    let raw = event_target_value(&ev);
                    catalog.update(|s| s.draft.sex = Sex::from_wire(&raw));
                }>
                    <option value="" selected=move || catalog.with(|s| s.draft.sex.is_none())>"Todos"</option>
                    {Sex::ALL
                        .into_iter()
                        .map(|sex| {
                            view! {
                                <option
                                    value=sex.as_wire()
                                    selected=move || catalog.with(|s| s.draft.sex == Some(sex))
                                >
                                    {sex_label(sex)}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </label>

            <div class="filter-panel__prices">
                <input
                    type="number"
                    min="0"
                    placeholder="Mínimo"
                    prop:value=move || catalog.with(|s| s.draft.min_price.clone())
                    on:input=move |ev| catalog.update(|s| s.draft.min_price = event_target_value(&ev))
                />
                <input
                    type="number"
                    min="0"
                    placeholder="Máximo"
                    prop:value=move || catalog.with(|s| s.draft.max_price.clone())
                    on:input=move |ev| catalog.update(|s| s.draft.max_price = event_target_value(&ev))
                />
            </div>

            <label class="filter-panel__field">
                "Promoción"
                <select
                    prop:value=move || catalog.with(|s| promotion_choice(s.draft.has_promotion))
                    on:change=move |ev| {
                        let raw = event_target_value(&ev);
                        catalog.update(|s| s.draft.has_promotion = parse_promotion_choice(&raw));
                    }
                >
                    <option value="">"Todas"</option>
                    <option value="true">"En promoción"</option>
                    <option value="false">"Sin promoción"</option>
                </select>
            </label>

            <label class="filter-panel__field">
                "Ordenar"
                <select
                    prop:value=move || catalog.with(|s| s.draft.ordering.map(|(by, dir)| order_key(by, dir)).unwrap_or_default())
                    on:change=move |ev| {
                        let raw = event_target_value(&ev);
                        catalog.update(|s| s.draft.ordering = parse_order_key(&raw));
                    }
                >
                    <option value="">"Relevancia"</option>
                    {OrderBy::ALL
                        .into_iter()
                        .flat_map(|by| OrderDirection::ALL.into_iter().map(move |dir| (by, dir)))
                        .map(|(by, dir)| view! { <option value=order_key(by, dir)>{ordering_label(by, dir)}</option> })
                        .collect_view()}
                </select>
            </label>

            {move || catalog.with(|s| s.draft_error.clone()).map(|e| view! { <p class="filter-panel__error">{e}</p> })}

            <div class="filter-panel__actions">
                <button type="submit" class="btn btn--primary" disabled=move || !catalog.with(CatalogState::has_pending_edits)>
                    "Aplicar"
                </button>
                <button type="button" class="btn" on:click=on_clear>"Limpiar"</button>
            </div>
        </form>
    }
}

/// Checkbox list for one multi-select facet.
#[component]
fn FacetGroup(facet: Facet, title: &'static str, values: Signal<Vec<String>>) -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();

    view! {
        <fieldset class="filter-panel__group">
            <legend>{title}</legend>
            <For each=move || values.get() key=Clone::clone let:value>
                {
                    let checked_value = value.clone();
                    let toggle_value = value.clone();
                    view! {
                        <label class="filter-panel__option">
                            <input
                                type="checkbox"
                                prop:checked=move || catalog.with(|s| s.draft.is_selected(facet, &checked_value))
                                on:change=move |_| catalog.update(|s| s.draft.toggle(facet, &toggle_value))
                            />
                            {value}
                        </label>
                    }
                }
            </For>
        </fieldset>
    }
}
