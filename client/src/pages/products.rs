//! Catalog page backed by the `/api/products` listing.

use leptos::prelude::*;

use crate::components::product_list::ProductList;
use catalog::Listing;

#[component]
pub fn ProductsPage() -> impl IntoView {
    view! {
        <div class="products-page">
            <h1>"Products"</h1>
            <ProductList source=Listing::Catalog/>
        </div>
    }
}
