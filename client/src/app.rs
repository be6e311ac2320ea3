//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{catalog::CatalogPage, categories::CategoriesPage};
use crate::state::{catalog::CatalogState, categories::CategoriesState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let catalog = RwSignal::new(CatalogState::default());
    let categories = RwSignal::new(CategoriesState::default());

    provide_context(catalog);
    provide_context(categories);

    view! {
        <Stylesheet id="leptos" href="/pkg/storefront.css"/>
        <Title text="Tienda"/>

        <Router>
            <nav class="site-nav">
                <a href="/">"Productos"</a>
                <a href="/categorias">"Categorías"</a>
            </nav>
            <Routes fallback=|| "Página no encontrada.".into_view()>
                <Route path=StaticSegment("") view=CatalogPage/>
                <Route path=StaticSegment("categorias") view=CategoriesPage/>
            </Routes>
        </Router>
    }
}
