//! Product URL submission form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Validates locally, then issues one `POST /api/track-product`. The busy
//! flag disables resubmission until the request settles.

use leptos::prelude::*;

use catalog::track::TRACK_FAILED_MESSAGE;

use crate::net::api;
use crate::state::track::TrackFormState;
use crate::util::bound_task::{bind_to_view, spawn_bound};

/// Form collecting a product URL to track.
#[component]
pub fn TrackForm() -> impl IntoView {
    let form = RwSignal::new(TrackFormState::default());
    let seq = bind_to_view();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(request) = form.try_update(TrackFormState::begin_submit).flatten() else {
            return;
        };
        spawn_bound(
            &seq,
            async move { api::track_product(&request).await },
            move |outcome| {
                form.try_update(|f| match outcome {
                    Ok(body) => f.finish_success(&body),
                    Err(err) => f.finish_failure(err.user_message(TRACK_FAILED_MESSAGE)),
                });
            },
        );
    };

    let busy = move || form.with(|f| f.busy);

    view! {
        <section class="track-form">
            <h2>"Track a product"</h2>
            <form class="track-form__row" on:submit=on_submit>
                <input
                    class="track-form__input"
                    type="text"
                    placeholder="https://www.amazon.com/dp/..."
                    disabled=busy
                    prop:value=move || form.with(|f| f.input.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.input = value);
                    }
                />
                <button class="btn btn--primary" type="submit" disabled=busy>
                    {move || if busy() { "Tracking..." } else { "Track" }}
                </button>
            </form>
            {move || {
                form.with(|f| f.error.clone())
                    .map(|error| view! { <p class="track-form__error" role="alert">{error}</p> })
            }}
            {move || {
                form.with(|f| f.notice.clone())
                    .map(|notice| view! { <p class="track-form__notice" role="status">{notice}</p> })
            }}
        </section>
    }
}
