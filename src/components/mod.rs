//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the chat and upload surfaces while reading/writing
//! shared state from Leptos context providers. Element ids match the page
//! markup contract (`chatbot-*`, `dropZone`, `fileList`, `chatList`, ...).

pub mod chat_list;
pub mod chat_panel;
pub mod chat_window;
pub mod drop_zone;
pub mod file_list;
pub mod upload_panel;
