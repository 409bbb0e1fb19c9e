//! Landing page: URL submission, query search, and tracked products.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::product_list::ProductList;
use crate::components::track_form::TrackForm;
use crate::state::analysis::analysis_href;
use catalog::Listing;

#[component]
pub fn HomePage() -> impl IntoView {
    let search = RwSignal::new(String::new());
    let navigate = use_navigate();

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(href) = search.with(|q| analysis_href(q)) {
            navigate(&href, NavigateOptions::default());
        }
    };

    view! {
        <div class="home-page">
            <h1>"Price Tracker AI"</h1>

            <section class="home-page__search">
                <form class="search-form" on:submit=on_search>
                    <input
                        class="search-form__input"
                        type="text"
                        placeholder="Describe what you're looking for..."
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit">"Search"</button>
                </form>
            </section>

            <TrackForm/>

            <section class="home-page__tracked">
                <h2>"Tracked Products"</h2>
                <ProductList source=Listing::Tracked/>
            </section>
        </div>
    }
}
