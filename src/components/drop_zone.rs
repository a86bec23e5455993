//! Drag-and-drop target and file picker feeding the upload staging list.

use leptos::prelude::*;

use crate::app::SelectionSignal;

/// `dropZone` with the `fileUpload` picker inside it.
///
/// Both a drop and a picker change append their files as one batch.
#[component]
pub fn DropZone() -> impl IntoView {
    #[cfg_attr(not(feature = "csr"), allow(unused_variables))]
    let selection = expect_context::<SelectionSignal>();
    let dragging = RwSignal::new(false);

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        dragging.set(false);

        #[cfg(feature = "csr")]
        {
            use crate::state::selection::PendingFile;

            let files = ev
                .data_transfer()
                .and_then(|dt| dt.files())
                .map(|list| PendingFile::from_file_list(&list))
                .unwrap_or_default();
            selection.update(|s| s.add_batch(files));
        }
    };

    let on_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            use crate::state::selection::PendingFile;
            use wasm_bindgen::JsCast;

            let files = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                .and_then(|input| input.files())
                .map(|list| PendingFile::from_file_list(&list))
                .unwrap_or_default();
            selection.update(|s| s.add_batch(files));
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = ev;
        }
    };

    view! {
        <div
            id="dropZone"
            class="drop-zone"
            class:dragover=move || dragging.get()
            on:dragover=move |ev: leptos::ev::DragEvent| {
                ev.prevent_default();
                dragging.set(true);
            }
            on:dragleave=move |ev: leptos::ev::DragEvent| {
                ev.prevent_default();
                dragging.set(false);
            }
            on:drop=on_drop
        >
            <p class="drop-zone__hint">"Drag and drop files here, or choose them:"</p>
            <input id="fileUpload" class="drop-zone__picker" type="file" multiple=true on:change=on_change/>
        </div>
    }
}
