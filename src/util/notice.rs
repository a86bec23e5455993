//! Blocking user notices for upload results and rejections.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

pub const NO_FILES_SELECTED: &str = "No files selected.";
pub const UPLOAD_SUCCEEDED: &str = "Files uploaded.";
pub const UPLOAD_FAILED: &str = "File upload failed.";
pub const UPLOAD_NOT_ACCEPTED: &str = "The server did not accept the files. They are kept for retry.";

/// Show a blocking `window.alert`. No-op outside the browser.
pub fn alert(message: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
    }
}
