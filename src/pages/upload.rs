//! Standalone file upload page.

use leptos::prelude::*;

use crate::components::upload_panel::UploadPanel;

/// Upload page: the staging panel without the chat surfaces.
#[component]
pub fn UploadPage() -> impl IntoView {
    view! {
        <div class="upload-page">
            <header class="upload-page__header">
                <h1>"File Upload"</h1>
                <a href="/chachat" class="upload-page__back">"Back to chat"</a>
            </header>
            <UploadPanel/>
        </div>
    }
}
