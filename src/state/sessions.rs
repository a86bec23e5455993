//! Sidebar chat sessions and the new-chat reset flow.
//!
//! Sessions are append-only for the life of the page. Starting one also
//! resets the conversation and the upload staging list; [`start_new_chat`]
//! applies all three and the sidebar posts the greeting afterwards.

#[cfg(test)]
#[path = "sessions_test.rs"]
mod sessions_test;

use std::time::Duration;

use super::chat::ChatState;
use super::selection::SelectionStore;

/// Bot greeting shown shortly after a new chat starts.
pub const NEW_CHAT_GREETING: &str = "A new chat has started.";

/// Placeholder paragraph rendered in `chatWindow` under the session title.
pub const CHAT_WINDOW_PLACEHOLDER: &str = "Chat messages will appear here.";

/// Delay before the greeting bubble appears.
pub const GREETING_DELAY: Duration = Duration::from_millis(100);

/// One entry in `chatList`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatSession {
    pub id: String,
    pub title: String,
}

/// Sidebar list plus the session currently shown in `chatWindow`.
#[derive(Clone, Debug, Default)]
pub struct ChatSessions {
    pub items: Vec<ChatSession>,
    pub active_id: Option<String>,
}

impl ChatSessions {
    /// Append a session titled `New chat N` (N = list length after insert)
    /// and make it active.
    pub fn create(&mut self) -> ChatSession {
        let session = ChatSession {
            id: uuid::Uuid::new_v4().to_string(),
            title: format!("New chat {}", self.items.len() + 1),
        };
        self.items.push(session.clone());
        self.active_id = Some(session.id.clone());
        session
    }

    /// Show an existing session in the chat window. Unknown ids are ignored.
    pub fn open(&mut self, id: &str) -> bool {
        if self.items.iter().any(|s| s.id == id) {
            self.active_id = Some(id.to_owned());
            true
        } else {
            false
        }
    }

    pub fn active(&self) -> Option<&ChatSession> {
        let id = self.active_id.as_deref()?;
        self.items.iter().find(|s| s.id == id)
    }

    pub fn active_title(&self) -> Option<&str> {
        self.active().map(|s| s.title.as_str())
    }
}

/// Open a fresh session, then empty the conversation and the staged files.
/// The greeting is not posted here; it follows after [`GREETING_DELAY`].
pub fn start_new_chat(
    sessions: &mut ChatSessions,
    chat: &mut ChatState,
    selection: &mut SelectionStore,
) -> ChatSession {
    let session = sessions.create();
    chat.reset();
    selection.clear();
    session
}
