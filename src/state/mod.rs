//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`chat`, `selection`, `sessions`) and kept free
//! of DOM access so every transition can be unit-tested on the host.

pub mod chat;
pub mod selection;
pub mod sessions;
