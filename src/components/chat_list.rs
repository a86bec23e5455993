//! Sidebar with the new-chat button and the list of chat sessions.

use leptos::prelude::*;

use crate::app::SelectionSignal;
use crate::state::chat::ChatState;
use crate::state::sessions::{ChatSessions, NEW_CHAT_GREETING, start_new_chat};

/// `newChatButton` and `chatList`.
#[component]
pub fn ChatList() -> impl IntoView {
    let sessions = expect_context::<RwSignal<ChatSessions>>();
    let chat = expect_context::<RwSignal<ChatState>>();
    let selection = expect_context::<SelectionSignal>();

    let on_new_chat = move |_| {
        sessions.update(|s| {
            chat.update(|c| {
                selection.update(|sel| {
                    start_new_chat(s, c, sel);
                });
            });
        });
        schedule_greeting(chat);
    };

    view! {
        <aside class="chat-sidebar">
            <button id="newChatButton" class="btn chat-sidebar__new" on:click=on_new_chat>
                "+ New chat"
            </button>
            <div id="chatList" class="chat-sidebar__list">
                {move || {
                    sessions.with(|s| {
                        s.items
                            .iter()
                            .map(|item| {
                                let id = item.id.clone();
                                let title = item.title.clone();
                                let active = s.active_id.as_deref() == Some(item.id.as_str());
                                view! {
                                    <div
                                        class="chat-item"
                                        class:chat-item--active=active
                                        on:click=move |_| {
                                            sessions.update(|s| {
                                                s.open(&id);
                                            });
                                        }
                                    >
                                        {title}
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    })
                }}
            </div>
        </aside>
    }
}

/// Post the new-chat greeting after a short delay so it lands after the reset.
fn schedule_greeting(chat: RwSignal<ChatState>) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(crate::state::sessions::GREETING_DELAY).await;
        chat.update(|c| c.push_bot(NEW_CHAT_GREETING));
    });
    #[cfg(not(feature = "csr"))]
    chat.update(|c| c.push_bot(NEW_CHAT_GREETING));
}
