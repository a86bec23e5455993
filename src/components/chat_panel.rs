//! Chat panel: bubble list, text input, and send button.
//!
//! SYSTEM CONTEXT
//! ==============
//! The user's bubble is rendered optimistically before `/save_chat` is sent;
//! the reply, if it carries an answer, lands as one bot bubble. Failures are
//! console-only. Each send is independent, so rapid clicks may overlap.

#[cfg(test)]
#[path = "chat_panel_test.rs"]
mod chat_panel_test;

use leptos::prelude::*;

use crate::state::chat::ChatState;

/// `chatbot-body` scroll area with `chatbot-ul`, plus the input row.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    let input = RwSignal::new(String::new());
    let body_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest bubble in view.
    Effect::new(move || {
        let _ = chat.with(|c| c.bubbles.len());

        #[cfg(feature = "csr")]
        {
            if let Some(el) = body_ref.get() {
                el.set_scroll_top(el.scroll_height() - el.client_height());
            }
        }
    });

    let do_send = move || {
        let raw = input.get_untracked();
        let Some(content) = chat.try_update(|c| c.accept_input(&raw)).flatten() else {
            return;
        };
        input.set(String::new());
        deliver(chat, content);
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if sends_on_key(&ev.key(), ev.shift_key(), ev.is_composing()) {
            ev.prevent_default();
            do_send();
        }
    };

    view! {
        <div class="chatbot">
            <div id="chatbot-body" class="chatbot-body" node_ref=body_ref>
                <ul id="chatbot-ul" class="chatbot-ul">
                    {move || {
                        chat.with(|c| {
                            c.bubbles
                                .iter()
                                .map(|bubble| {
                                    let item_class = bubble.side.item_class();
                                    let text_class = bubble.side.text_class();
                                    let text = bubble.text.clone();
                                    view! {
                                        <li class=item_class>
                                            <div class=text_class>{text}</div>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        })
                    }}
                </ul>
            </div>

            <div class="chatbot-footer">
                <input
                    id="chatbot-text"
                    class="chatbot-text"
                    type="text"
                    placeholder="Type a message..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button id="chatbot-submit" class="btn btn--primary chatbot-submit" on:click=on_click>
                    "Send"
                </button>
            </div>
        </div>
    }
}

/// Enter sends; Shift+Enter and Enter that commits IME composition do not.
fn sends_on_key(key: &str, shift: bool, composing: bool) -> bool {
    key == "Enter" && !shift && !composing
}

/// Send `content` to `/save_chat` in the background and apply the reply.
fn deliver(chat: RwSignal<ChatState>, content: String) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        use crate::net::types::SaveOutcome;

        let token = crate::util::csrf::token_or_empty();
        match crate::net::api::save_chat(&content, &token).await {
            Ok(resp) => {
                let outcome = resp.outcome();
                if let SaveOutcome::Rejected(message) = &outcome {
                    leptos::logging::error!(
                        "chat save failed: {}",
                        message.as_deref().unwrap_or("no message")
                    );
                } else {
                    leptos::logging::log!("chat saved");
                }
                chat.update(|c| {
                    c.apply_outcome(&outcome);
                });
            }
            Err(e) => leptos::logging::error!("chat save error: {e}"),
        }
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (chat, content);
    }
}
