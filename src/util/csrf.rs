//! Anti-forgery token lookup.
//!
//! The page host renders `<meta name="csrf-token" content="...">`; the token
//! is read at send time so a re-rendered page never leaves a stale copy here.

#[cfg(test)]
#[path = "csrf_test.rs"]
mod csrf_test;

/// `name` attribute of the meta tag carrying the token.
pub const CSRF_META_NAME: &str = "csrf-token";

#[cfg(any(test, feature = "csr"))]
fn meta_selector() -> String {
    format!("meta[name=\"{CSRF_META_NAME}\"]")
}

/// Read the anti-forgery token from the page, if present.
pub fn read_token() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let doc = web_sys::window()?.document()?;
        let meta = doc.query_selector(&meta_selector()).ok().flatten()?;
        meta.get_attribute("content").filter(|t| !t.is_empty())
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Token to attach to a request; logs and falls back to empty when missing.
pub fn token_or_empty() -> String {
    read_token().unwrap_or_else(|| {
        leptos::logging::warn!("no {CSRF_META_NAME} meta tag; sending request without a token");
        String::new()
    })
}
