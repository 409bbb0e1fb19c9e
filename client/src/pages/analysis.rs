//! Analysis page; the query comes from the `q` URL parameter.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::analysis_view::AnalysisView;

#[component]
pub fn AnalysisPage() -> impl IntoView {
    let params = use_query_map();
    let query = Signal::derive(move || params.with(|p| p.get("q")));

    view! {
        <div class="analysis-page">
            <header class="analysis-page__header">
                <a href="/" class="analysis-page__back" aria-label="Back">"←"</a>
                <h1>"Product Analysis"</h1>
            </header>
            {move || query.get().map(|q| view! { <p class="analysis-page__query">{q}</p> })}
            <AnalysisView query=query/>
        </div>
    }
}
