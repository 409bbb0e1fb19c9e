//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{A, Route, Router, Routes},
};

use crate::pages::{analysis::AnalysisPage, assistant::AssistantPage, home::HomePage, products::ProductsPage};

/// Root application component.
///
/// Views hold their own state; nothing is provided through context.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Price Tracker AI"/>

        <Router>
            <nav class="app-nav">
                <A href="/">"Track"</A>
                <A href="/products">"Catalog"</A>
                <A href="/analysis">"Analysis"</A>
                <A href="/assistant">"Assistant"</A>
            </nav>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("products") view=ProductsPage/>
                    <Route path=StaticSegment("analysis") view=AnalysisPage/>
                    <Route path=StaticSegment("assistant") view=AssistantPage/>
                </Routes>
            </main>
        </Router>
    }
}
