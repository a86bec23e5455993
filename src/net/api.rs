//! HTTP helpers for the chat-persistence and file-upload endpoints.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Host builds: stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Both calls are single-shot with no retry. Callers get a `Result` and turn
//! failures into a console line plus a user notice; nothing here panics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{SaveChatResponse, UploadReply};
#[cfg(any(test, feature = "csr"))]
use super::types::SaveChatRequest;
use crate::state::selection::PendingFile;

/// Chat persistence + bot answer endpoint.
pub const SAVE_CHAT_ENDPOINT: &str = "/save_chat";

/// Multipart upload endpoint.
pub const UPLOAD_ENDPOINT: &str = "/upload";

/// Repeated multipart field carrying each staged file.
pub const UPLOAD_FIELD: &str = "files[]";

/// Header carrying the anti-forgery token.
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Failures surfaced by the request helpers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("could not build request: {0}")]
    Encode(String),
    #[error("request failed: {0}")]
    Network(String),
    #[error("invalid response body (status {status}): {detail}")]
    Decode { status: u16, detail: String },
    #[error("not available outside the browser")]
    Unavailable,
}

#[cfg(any(test, feature = "csr"))]
fn save_chat_body(content: &str) -> SaveChatRequest {
    SaveChatRequest::user(content)
}

#[cfg(any(test, feature = "csr"))]
fn decode_error(status: u16, detail: impl std::fmt::Display) -> ApiError {
    ApiError::Decode {
        status,
        detail: detail.to_string(),
    }
}

/// Persist a user message via `POST /save_chat` and return the server's reply.
///
/// The body is decoded whatever the HTTP status, because error replies also
/// carry a JSON `{status, message}` object.
///
/// # Errors
///
/// Returns an error if the request cannot be sent or the body is not the
/// expected JSON.
pub async fn save_chat(content: &str, csrf_token: &str) -> Result<SaveChatResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(SAVE_CHAT_ENDPOINT)
            .header(CSRF_HEADER, csrf_token)
            .json(&save_chat_body(content))
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();
        resp.json::<SaveChatResponse>()
            .await
            .map_err(|e| decode_error(status, e))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (content, csrf_token);
        Err(ApiError::Unavailable)
    }
}

/// Upload every file in one multipart `POST /upload`, each under
/// [`UPLOAD_FIELD`]. Any JSON reply is returned with its HTTP status; the
/// caller decides what a non-2xx reply means for the staged files.
///
/// # Errors
///
/// Returns an error if the form cannot be built, the request fails, or the
/// reply is not JSON.
pub async fn upload_files(files: &[PendingFile]) -> Result<UploadReply, ApiError> {
    #[cfg(feature = "csr")]
    {
        let form = build_upload_form(files)?;
        let resp = gloo_net::http::Request::post(UPLOAD_ENDPOINT)
            .body(form)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();
        let body = resp
            .json::<serde_json::Value>()
            .await
            .map_err(|e| decode_error(status, e))?;
        Ok(UploadReply { status, body })
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = files;
        Err(ApiError::Unavailable)
    }
}

#[cfg(feature = "csr")]
fn build_upload_form(files: &[PendingFile]) -> Result<web_sys::FormData, ApiError> {
    let form = web_sys::FormData::new().map_err(|e| ApiError::Encode(format!("{e:?}")))?;
    for pending in files {
        form.append_with_blob_and_filename(UPLOAD_FIELD, pending.file(), &pending.name)
            .map_err(|e| ApiError::Encode(format!("{e:?}")))?;
    }
    Ok(form)
}
