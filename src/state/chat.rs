//! Conversation state for the chat panel.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::types::SaveOutcome;

/// Which side of the conversation a bubble is rendered on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BubbleSide {
    /// Bot reply, left-aligned.
    Left,
    /// User message, right-aligned.
    Right,
}

impl BubbleSide {
    /// Class applied to the `<li>` wrapper.
    pub fn item_class(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    /// Class applied to the inner text `<div>`.
    pub fn text_class(self) -> &'static str {
        match self {
            Self::Left => "chatbot-left",
            Self::Right => "chatbot-right",
        }
    }
}

/// A single rendered chat message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatBubble {
    pub id: String,
    pub side: BubbleSide,
    pub text: String,
}

impl ChatBubble {
    fn new(side: BubbleSide, text: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            side,
            text: text.into(),
        }
    }
}

/// Bubbles shown in `chatbot-ul` plus the raw history of accepted user input.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub bubbles: Vec<ChatBubble>,
    pub history: Vec<String>,
}

impl ChatState {
    /// Record an accepted user message and render its right-aligned bubble.
    pub fn push_user(&mut self, text: &str) {
        self.history.push(text.to_owned());
        self.bubbles.push(ChatBubble::new(BubbleSide::Right, text));
    }

    /// Render a left-aligned bot bubble.
    pub fn push_bot(&mut self, text: impl Into<String>) {
        self.bubbles.push(ChatBubble::new(BubbleSide::Left, text));
    }

    /// Apply a `/save_chat` reply. Only an answer produces a bubble; returns
    /// whether one was added.
    pub fn apply_outcome(&mut self, outcome: &SaveOutcome) -> bool {
        match outcome {
            SaveOutcome::Answered(answer) => {
                self.push_bot(answer.clone());
                true
            }
            SaveOutcome::Saved | SaveOutcome::Rejected(_) => false,
        }
    }

    /// Take raw input from the text box. Blank input changes nothing and
    /// returns `None`; otherwise the user bubble is pushed and the text to
    /// send is returned.
    pub fn accept_input(&mut self, raw: &str) -> Option<String> {
        let content = outgoing_message(raw)?;
        self.push_user(content);
        Some(content.to_owned())
    }

    /// Empty the conversation and the user history.
    pub fn reset(&mut self) {
        self.bubbles.clear();
        self.history.clear();
    }
}

/// Return the text to send, or `None` when the input is empty or
/// whitespace-only. Accepted text is sent as typed, without trimming.
pub fn outgoing_message(raw: &str) -> Option<&str> {
    if raw.trim().is_empty() { None } else { Some(raw) }
}
