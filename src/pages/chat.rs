//! Chat page: sidebar, active chat, and the upload panel.

use leptos::prelude::*;

use crate::components::chat_list::ChatList;
use crate::components::chat_panel::ChatPanel;
use crate::components::chat_window::ChatWindow;
use crate::components::upload_panel::UploadPanel;

/// Main workspace: session sidebar on the left, conversation and file staging
/// in the main column.
#[component]
pub fn ChatPage() -> impl IntoView {
    view! {
        <div class="chat-page">
            <ChatList/>
            <main class="chat-page__main">
                <ChatWindow/>
                <ChatPanel/>
                <UploadPanel/>
            </main>
        </div>
    }
}
