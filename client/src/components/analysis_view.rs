//! Analysis result for a query: category, price range, key features,
//! recommendations, and matched products.
//!
//! SYSTEM CONTEXT
//! ==============
//! Issues one `POST /api/search` per distinct query. Every section degrades
//! to a placeholder or is omitted when the backend leaves it out.

use leptos::prelude::*;

use catalog::analysis::ANALYSIS_FAILED_MESSAGE;

use crate::net::api;
use crate::state::analysis::{AnalysisSections, AnalysisState};
use crate::state::view::ViewState;
use crate::util::bound_task::{bind_to_view, spawn_bound};

/// Analysis for `query`; renders a prompt while no query is given.
#[component]
pub fn AnalysisView(#[prop(into)] query: Signal<Option<String>>) -> impl IntoView {
    let state = RwSignal::new(AnalysisState::default());
    let seq = bind_to_view();

    Effect::new(move || {
        let next = query.get();
        let Some(request) = state.try_update(|s| s.set_query(next.as_deref())).flatten() else {
            return;
        };
        spawn_bound(
            &seq,
            async move { api::search(&request).await },
            move |outcome| {
                let outcome = outcome.map_err(|err| err.user_message(ANALYSIS_FAILED_MESSAGE));
                state.try_update(|s| s.finish(outcome));
            },
        );
    });

    view! {
        <section class="analysis">
            {move || match state.with(|s| s.view.clone()) {
                ViewState::Idle => {
                    view! { <p class="analysis__prompt">"Describe what you're looking for to get an analysis."</p> }
                        .into_any()
                }
                ViewState::Loading => {
                    view! { <div class="analysis__spinner" aria-label="Analyzing"></div> }.into_any()
                }
                ViewState::Failed(message) => {
                    view! { <p class="analysis__error" role="alert">{message}</p> }.into_any()
                }
                ViewState::Loaded(result) => {
                    view! { <AnalysisSectionsView sections=AnalysisSections::from(&result)/> }.into_any()
                }
            }}
        </section>
    }
}

#[component]
fn AnalysisSectionsView(sections: AnalysisSections) -> impl IntoView {
    let AnalysisSections { category, price_range, key_features, recommendations, advisor_note, matches } = sections;

    view! {
        <div class="analysis__summary">
            <h3>"Query Analysis"</h3>
            <p>"Category: " <span class="analysis__category">{category}</span></p>
            <p>"Price range: " <span class="analysis__price-range">{price_range}</span></p>
            {key_features.map(|features| {
                view! {
                    <div class="analysis__features">
                        <h4>"Key features"</h4>
                        <ul>{features.into_iter().map(|f| view! { <li>{f}</li> }).collect::<Vec<_>>()}</ul>
                    </div>
                }
            })}
        </div>
        {advisor_note.map(|note| view! { <p class="analysis__note">{note}</p> })}
        {(!recommendations.is_empty())
            .then(|| {
                view! {
                    <div class="analysis__recommendations">
                        <h3>"Recommended Products"</h3>
                        <div class="analysis__grid">
                            {recommendations
                                .into_iter()
                                .map(|r| {
                                    view! {
                                        <div class="analysis__card">
                                            <h4>{r.name}</h4>
                                            <p class="analysis__price">{r.price}</p>
                                            {r.rating.map(|rating| view! { <p class="analysis__rating">{rating}</p> })}
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    </div>
                }
            })}
        {(!matches.is_empty())
            .then(|| {
                view! {
                    <div class="analysis__matches">
                        <h3>"Matched Products"</h3>
                        <ul>
                            {matches
                                .into_iter()
                                .map(|m| {
                                    view! {
                                        <li class="analysis__match">
                                            <span>{m.name}</span>
                                            " "
                                            <span class="analysis__price">{m.price}</span>
                                            {m.source.map(|s| view! { <span class="analysis__source">{format!(" ({s})")}</span> })}
                                            {m.url.map(|href| view! { <a href=href target="_blank" rel="noopener noreferrer">" View"</a> })}
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </ul>
                    </div>
                }
            })}
    }
}
