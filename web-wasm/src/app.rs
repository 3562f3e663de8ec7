//! Application shell: shared document state, routing and layout.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::components::{footer::Footer, navbar::Navbar};
use crate::pages::{document::DocumentPage, history::HistoryPage, home::HomePage};
use sentimatic_common::Document;

/// Shared submission history, handed to the pages that show or change it.
#[derive(Clone, Copy)]
pub struct DocumentStore {
    pub documents: RwSignal<Vec<Document>>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self {
            documents: RwSignal::new(Vec::new()),
        }
    }

    /// Reloads the full history from the backend. A failed reload only
    /// reaches the console; the last good list stays on screen.
    pub fn refresh(self) {
        spawn_local(async move {
            match api::fetch_all_documents().await {
                Ok(documents) => self.documents.set(documents),
                Err(err) => gloo::console::error!(format!("fetching documents failed: {:?}", err)),
            }
        });
    }
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Root component: navbar, routed page content, footer. The store starts
/// empty; the history page loads it on mount, so nothing is fetched for
/// routes that never read it.
#[component]
pub fn App() -> impl IntoView {
    let store = DocumentStore::new();

    view! {
        <Router>
            <div class="app">
                <Navbar />
                <main class="page">
                    <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                        <Route path=path!("/") view=move || view! { <HomePage store=store /> } />
                        <Route path=path!("/history") view=move || view! { <HistoryPage store=store /> } />
                        <Route path=path!("/document/:id") view=DocumentPage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_starts_empty_until_a_page_refreshes() {
        let store = DocumentStore::new();
        assert!(store.documents.get_untracked().is_empty());
    }
}
