//! Header area for the currently opened chat session.

use leptos::prelude::*;

use crate::state::sessions::{CHAT_WINDOW_PLACEHOLDER, ChatSessions};

/// `chatWindow`: hidden until a session is opened, then shows its title.
#[component]
pub fn ChatWindow() -> impl IntoView {
    let sessions = expect_context::<RwSignal<ChatSessions>>();

    let title = move || sessions.with(|s| s.active_title().map(str::to_owned));

    view! {
        <div
            id="chatWindow"
            class="chat-window"
            style:display=move || if title().is_some() { "block" } else { "none" }
        >
            <h2>{move || title().unwrap_or_default()}</h2>
            <p>{CHAT_WINDOW_PLACEHOLDER}</p>
        </div>
    }
}
