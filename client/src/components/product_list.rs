//! Product list with loading, error, empty, and loaded states.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetches once on mount. There is no paging, sorting, or refresh; a new
//! mount is the only way to refetch.

use leptos::prelude::*;

use catalog::Listing;

use crate::components::product_card::ProductCard;
use crate::net::api;
use crate::state::products::{EMPTY_MESSAGE, ProductsRender, ProductsState};
use crate::util::bound_task::{bind_to_view, spawn_bound};

/// Grid of products from the given backend listing.
#[component]
pub fn ProductList(#[prop(optional)] source: Listing) -> impl IntoView {
    let state = RwSignal::new(ProductsState::default());
    let seq = bind_to_view();

    state.update(ProductsState::start);
    spawn_bound(
        &seq,
        async move { api::fetch_products(source).await },
        move |outcome| {
            let outcome = outcome.map_err(|err| err.user_message(source.failure_message()));
            state.try_update(|s| s.finish(outcome));
        },
    );

    view! {
        <section class="product-list">
            {move || match state.with(ProductsState::render) {
                ProductsRender::Loading => {
                    view! { <div class="product-list__spinner" aria-label="Loading products"></div> }.into_any()
                }
                ProductsRender::Error(message) => {
                    view! { <p class="product-list__error" role="alert">{message}</p> }.into_any()
                }
                ProductsRender::Empty => view! { <p class="product-list__empty">{EMPTY_MESSAGE}</p> }.into_any(),
                ProductsRender::Cards(products) => {
                    view! {
                        <div class="product-list__grid">
                            {products
                                .into_iter()
                                .map(|product| view! { <ProductCard product=product/> })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}
