#![cfg(not(feature = "csr"))]

use super::*;
use crate::state::selection::PendingFile;
use serde_json::json;

fn staged(names: &[&str]) -> (SelectionStore, UploadBatch) {
    let mut store = SelectionStore::default();
    store.add_batch(names.iter().map(|n| PendingFile::new(*n, 10, "text/plain")));
    let batch = store.begin_upload().expect("non-empty store should start upload");
    (store, batch)
}

fn reply(status: u16) -> Result<UploadReply, ApiError> {
    Ok(UploadReply {
        status,
        body: json!({ "error": "too large" }),
    })
}

// =============================================================
// status_label
// =============================================================

#[test]
fn status_label_idle_is_blank() {
    assert_eq!(status_label(UploadStatus::Idle), "");
}

#[test]
fn status_label_covers_upload_lifecycle() {
    assert_eq!(status_label(UploadStatus::Uploading), "Uploading...");
    assert_eq!(status_label(UploadStatus::Succeeded), "Upload complete.");
    assert_eq!(status_label(UploadStatus::Failed), "Upload failed.");
}

// =============================================================
// rejection_notice
// =============================================================

#[test]
fn empty_store_click_shows_no_files_notice() {
    let mut store = SelectionStore::default();
    let rejection = store.begin_upload().expect_err("empty store must be refused");
    assert_eq!(rejection_notice(rejection), Some(notice::NO_FILES_SELECTED));
}

#[test]
fn in_flight_click_is_silent() {
    assert_eq!(rejection_notice(UploadRejection::InFlight), None);
}

#[test]
fn cleared_during_upload_click_still_shows_no_files_notice() {
    let (mut store, _batch) = staged(&["a.txt"]);
    store.clear();
    let rejection = store.begin_upload().expect_err("empty store must be refused");
    assert_eq!(rejection_notice(rejection), Some(notice::NO_FILES_SELECTED));
}

// =============================================================
// settle_upload
// =============================================================

#[test]
fn accepted_reply_clears_submitted_files() {
    let (mut store, batch) = staged(&["a.txt", "b.txt"]);
    let message = settle_upload(&mut store, &batch, &reply(200));
    assert_eq!(message, notice::UPLOAD_SUCCEEDED);
    assert!(store.is_empty());
    assert_eq!(store.status(), UploadStatus::Succeeded);
}

#[test]
fn server_error_reply_keeps_files() {
    let (mut store, batch) = staged(&["a.txt", "b.txt"]);
    let message = settle_upload(&mut store, &batch, &reply(500));
    assert_eq!(message, notice::UPLOAD_NOT_ACCEPTED);
    assert_eq!(store.len(), 2);
    assert_eq!(store.status(), UploadStatus::Failed);
}

#[test]
fn payload_too_large_reply_keeps_files() {
    let (mut store, batch) = staged(&["big.bin"]);
    settle_upload(&mut store, &batch, &reply(413));
    assert_eq!(store.rows()[0].name, "big.bin");
}

#[test]
fn transport_failure_keeps_files() {
    let (mut store, batch) = staged(&["a.txt"]);
    let failed = Err(ApiError::Network("offline".to_owned()));
    let message = settle_upload(&mut store, &batch, &failed);
    assert_eq!(message, notice::UPLOAD_FAILED);
    assert_eq!(store.len(), 1);
    assert_eq!(store.status(), UploadStatus::Failed);
}
