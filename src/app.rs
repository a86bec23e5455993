//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{chat::ChatPage, upload::UploadPage};
use crate::state::{chat::ChatState, selection::SelectionStore, sessions::ChatSessions};

/// Context handle for the upload staging list.
///
/// Local storage because staged entries hold browser `File` handles.
pub type SelectionSignal = RwSignal<SelectionStore, LocalStorage>;

/// Root application component.
///
/// Creates the page-lifetime stores, provides them as contexts, and sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let chat = RwSignal::new(ChatState::default());
    let sessions = RwSignal::new(ChatSessions::default());
    let selection: SelectionSignal = RwSignal::new_local(SelectionStore::default());

    provide_context(chat);
    provide_context(sessions);
    provide_context(selection);

    view! {
        <Stylesheet id="chachat" href="/static/css/chachat.css"/>
        <Title text="chachat"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ChatPage/>
                <Route path=StaticSegment("chachat") view=ChatPage/>
                <Route path=StaticSegment("file_upload") view=UploadPage/>
            </Routes>
        </Router>
    }
}
