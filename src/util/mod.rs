//! Small browser-facing helpers: the anti-forgery token lookup, file size
//! formatting for the list footer, and the blocking upload notices.
//!
//! Each helper has a host fallback so the stores and components that call it
//! stay testable without a DOM.

pub mod csrf;
pub mod format;
pub mod notice;
