//! Upload panel: drop zone, staged-file list, and the upload button.
//!
//! SYSTEM CONTEXT
//! ==============
//! An empty selection is rejected locally with a notice. Otherwise the staged
//! files go out as one multipart request. A 2xx reply clears the submitted
//! files; a non-2xx reply or a transport failure keeps them for a retry.
//! There is no automatic retry or cancel.

#[cfg(test)]
#[path = "upload_panel_test.rs"]
mod upload_panel_test;

use leptos::prelude::*;

use crate::app::SelectionSignal;
use crate::components::drop_zone::DropZone;
use crate::components::file_list::FileList;
use crate::net::api::ApiError;
use crate::net::types::UploadReply;
use crate::state::selection::{SelectionStore, UploadBatch, UploadRejection, UploadStatus};
use crate::util::notice;

/// Staging UI plus the `uploadButton` submitter.
#[component]
pub fn UploadPanel() -> impl IntoView {
    let selection = expect_context::<SelectionSignal>();

    let on_upload = move |_| match selection.try_update(SelectionStore::begin_upload) {
        Some(Ok(batch)) => submit(selection, batch),
        Some(Err(rejection)) => {
            if let Some(message) = rejection_notice(rejection) {
                notice::alert(message);
            }
        }
        None => {}
    };

    let uploading = move || selection.with(|s| s.status() == UploadStatus::Uploading);

    view! {
        <section class="upload-panel">
            <DropZone/>
            <FileList/>
            <div class="upload-panel__actions">
                <button
                    id="uploadButton"
                    class="btn btn--primary upload-panel__submit"
                    on:click=on_upload
                    disabled=uploading
                >
                    "Upload"
                </button>
                <span class="upload-panel__status" aria-live="polite">
                    {move || status_label(selection.with(SelectionStore::status))}
                </span>
            </div>
        </section>
    }
}

fn status_label(status: UploadStatus) -> &'static str {
    match status {
        UploadStatus::Idle => "",
        UploadStatus::Uploading => "Uploading...",
        UploadStatus::Succeeded => "Upload complete.",
        UploadStatus::Failed => "Upload failed.",
    }
}

/// Notice for a refused click. An in-flight refusal stays silent because the
/// button is already disabled and the status line says `Uploading...`.
fn rejection_notice(rejection: UploadRejection) -> Option<&'static str> {
    match rejection {
        UploadRejection::Empty => Some(notice::NO_FILES_SELECTED),
        UploadRejection::InFlight => None,
    }
}

/// Apply a finished request to the store and pick the notice to show.
/// Only a 2xx reply drops the submitted entries.
fn settle_upload(
    store: &mut SelectionStore,
    batch: &UploadBatch,
    result: &Result<UploadReply, ApiError>,
) -> &'static str {
    match result {
        Ok(reply) if reply.accepted() => {
            store.complete_upload(batch);
            notice::UPLOAD_SUCCEEDED
        }
        Ok(_) => {
            store.fail_upload();
            notice::UPLOAD_NOT_ACCEPTED
        }
        Err(_) => {
            store.fail_upload();
            notice::UPLOAD_FAILED
        }
    }
}

/// Run the multipart upload in the background and settle the store.
fn submit(selection: SelectionSignal, batch: UploadBatch) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::upload_files(batch.files()).await;
        match &result {
            Ok(reply) if reply.accepted() => {
                leptos::logging::log!("upload succeeded ({} files): {}", batch.len(), reply.body);
            }
            Ok(reply) => {
                leptos::logging::error!("upload refused (status {}): {}", reply.status, reply.body);
            }
            Err(e) => leptos::logging::error!("upload failed: {e}"),
        }
        if let Some(message) = selection.try_update(|s| settle_upload(s, &batch, &result)) {
            notice::alert(message);
        }
    });
    #[cfg(not(feature = "csr"))]
    {
        let result = Err(ApiError::Unavailable);
        selection.update(|s| {
            settle_upload(s, &batch, &result);
        });
    }
}
