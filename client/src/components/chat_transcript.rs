//! Shopping-assistant transcript with an input row.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sending appends the user's turn locally; there is no network call and no
//! reply yet. Assistant turns are rendered as sanitized markdown.

use leptos::prelude::*;

use catalog::{ChatMessage, ChatRole};

use crate::state::chat::ChatState;
use crate::util::markdown::render_markdown_html;

/// Chat transcript plus prompt input.
#[component]
pub fn ChatTranscript() -> impl IntoView {
    let chat = RwSignal::new(ChatState::default());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = chat.with(|c| c.transcript.len());
        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    let do_send = move || {
        chat.update(|c| {
            c.send();
        });
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let can_send = move || chat.with(|c| !c.input.trim().is_empty());

    view! {
        <div class="chat">
            <div class="chat__messages" node_ref=messages_ref>
                {move || {
                    chat.with(|c| c.transcript.iter().cloned().collect::<Vec<_>>())
                        .into_iter()
                        .map(|message| view! { <ChatBubble message=message/> })
                        .collect::<Vec<_>>()
                }}
            </div>
            <div class="chat__input-row">
                <input
                    class="chat__input"
                    type="text"
                    placeholder="Describe what you're looking for..."
                    prop:value=move || chat.with(|c| c.input.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        chat.update(|c| c.input = value);
                    }
                    on:keydown=on_keydown
                />
                <button class="btn btn--primary chat__send" on:click=move |_| do_send() disabled=move || !can_send()>
                    "Send"
                </button>
            </div>
        </div>
    }
}

#[component]
fn ChatBubble(message: ChatMessage) -> impl IntoView {
    let is_assistant = message.role == ChatRole::Assistant;
    let is_user = message.role == ChatRole::User;
    view! {
        <div
            class="chat__message"
            class:chat__message--assistant=is_assistant
            class:chat__message--user=is_user
            data-message-id=message.id
        >
            {if is_assistant {
                let rendered = render_markdown_html(&message.content);
                view! { <div class="chat__markdown" inner_html=rendered></div> }.into_any()
            } else {
                view! { <span>{message.content}</span> }.into_any()
            }}
        </div>
    }
}
