//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page only composes `components`; all shared state comes from the
//! contexts provided by `App`.

pub mod chat;
pub mod upload;
