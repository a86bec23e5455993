//! Rendered view of the upload staging list.
//!
//! The whole list is rebuilt from [`SelectionStore::rows`] on every change,
//! so each remove button is bound to its entry's index in the current render.
//!
//! [`SelectionStore::rows`]: crate::state::selection::SelectionStore::rows

use leptos::prelude::*;

use crate::app::SelectionSignal;
use crate::util::format::selection_summary;

/// `fileList`: one row per staged file with a remove action.
#[component]
pub fn FileList() -> impl IntoView {
    let selection = expect_context::<SelectionSignal>();

    view! {
        <div id="fileList" class="file-list">
            {move || {
                selection
                    .with(|s| s.rows())
                    .into_iter()
                    .map(|row| {
                        let index = row.index;
                        view! {
                            <div class="file-list__item">
                                <span class="file-list__name">{row.name}</span>
                                <button
                                    class="btn file-list__remove"
                                    on:click=move |_| {
                                        selection.update(|s| {
                                            s.remove_at(index);
                                        });
                                    }
                                >
                                    "Remove"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
        <Show when=move || selection.with(|s| !s.is_empty())>
            <p class="file-list__summary">
                {move || selection.with(|s| selection_summary(s.len(), s.total_size()))}
            </p>
        </Show>
    }
}
