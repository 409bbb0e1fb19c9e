//! Personal shopping assistant page.

use leptos::prelude::*;

use crate::components::chat_transcript::ChatTranscript;

#[component]
pub fn AssistantPage() -> impl IntoView {
    view! {
        <div class="assistant-page">
            <header class="assistant-page__header">
                <a href="/" class="assistant-page__back" aria-label="Back">"←"</a>
                <h1>"Shopping Assistant"</h1>
            </header>
            <ChatTranscript/>
        </div>
    }
}
