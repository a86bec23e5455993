//! Wire DTOs for the `/save_chat` and `/upload` endpoints.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Request body for `POST /save_chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveChatRequest {
    pub content: String,
    pub is_user_message: bool,
}

impl SaveChatRequest {
    /// A message typed by the user.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_user_message: true,
        }
    }
}

/// Response body from `POST /save_chat`.
///
/// Error responses carry `status: "error"` and a `message`; success responses
/// may carry the bot's `answer`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveChatResponse {
    pub status: String,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// What the chat panel should do with a `/save_chat` response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Saved, and the bot answered with this text.
    Answered(String),
    /// Saved, no answer to show.
    Saved,
    /// Application-level failure, with the server's message if any.
    Rejected(Option<String>),
}

impl SaveChatResponse {
    pub fn outcome(self) -> SaveOutcome {
        if self.status != "success" {
            return SaveOutcome::Rejected(self.message);
        }
        match self.answer {
            Some(answer) if !answer.is_empty() => SaveOutcome::Answered(answer),
            _ => SaveOutcome::Saved,
        }
    }
}

/// Reply from `POST /upload`: HTTP status plus the schema-less JSON body.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadReply {
    pub status: u16,
    pub body: serde_json::Value,
}

impl UploadReply {
    /// Whether the server accepted the files (2xx).
    pub fn accepted(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
