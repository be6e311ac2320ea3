//! Card for one product in the catalog grid.

use catalog::Product;
use leptos::prelude::*;

use crate::util::format::format_price;

/// A product tile: image, name, and price with the promotional price struck through.
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let on_sale = product.has_promotion && product.promotional_price.is_some();
    let price = format_price(product.effective_price());
    let list_price = format_price(product.sale_price);

    view! {
        <article class="product-card">
            {product.image_url.map(|src| view! { <img class="product-card__image" src=src alt=product.denomination.clone()/> })}
            <h3 class="product-card__name">{product.denomination.clone()}</h3>
            <p class="product-card__price">
                <Show when=move || on_sale>
                    <s class="product-card__list-price">{list_price.clone()}</s>
                </Show>
                <span>{price}</span>
            </p>
            {product.category.map(|c| view! { <span class="product-card__category">{c}</span> })}
        </article>
    }
}
