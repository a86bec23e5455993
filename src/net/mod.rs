//! Networking modules for the chat and upload endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the single-shot HTTP requests and `types` defines the JSON
//! bodies exchanged with `/save_chat`.

pub mod api;
pub mod types;
