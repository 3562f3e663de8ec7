//! History page: every analyzed press release in a table.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::app::DocumentStore;
use crate::components::status_dialog::{Status, StatusDialog};

/// Backend fields can be empty on old or partial records.
fn cell_text(value: &str) -> String {
    if value.is_empty() {
        "N/A".to_string()
    } else {
        value.to_string()
    }
}

/// Submission history with per-row links to the detail page and a guarded
/// delete. Deletion asks for confirmation, reports its outcome and reloads
/// the table either way.
#[component]
pub fn HistoryPage(store: DocumentStore) -> impl IntoView {
    let (pending_delete, set_pending_delete) = signal(None::<String>);
    let (is_deleting, set_is_deleting) = signal(false);
    let (status, set_status) = signal(None::<Status>);

    Effect::new(move |_| {
        store.refresh();
    });

    let on_confirm_delete = move |_| {
        let Some(id) = pending_delete.get() else {
            return;
        };
        set_is_deleting.set(true);
        spawn_local(async move {
            match api::delete_document(&id).await {
                Ok(()) => set_status.set(Some(Status::Success)),
                Err(err) => {
                    gloo::console::error!(format!("deleting document failed: {:?}", err));
                    set_status.set(Some(Status::Error));
                }
            }
            set_is_deleting.set(false);
            set_pending_delete.set(None);
            store.refresh();
        });
    };

    view! {
        <div class="history">
            <table class="documents">
                <thead>
                    <tr>
                        <th class="col-index"></th>
                        <th>"Sentimental Label"</th>
                        <th>"Submit Time"</th>
                        <th class="col-text">"Press Release"</th>
                        <th>"Operation"</th>
                    </tr>
                </thead>
                <tbody>
                    // Rows are keyed by id and survive a reload, so the row
                    // number has to be reactive to renumber after a delete.
                    <ForEnumerate
                        each=move || store.documents.get()
                        key=|document| document.id.clone()
                        children=move |index, document| {
                            let detail_href = format!("/document/{}", document.id);
                            let delete_id = document.id.clone();
                            view! {
                                <tr>
                                    <td class="col-index">{move || index.get() + 1}</td>
                                    <td>{cell_text(&document.sent_lab)}</td>
                                    <td>{cell_text(&document.submit_time)}</td>
                                    <td class="col-text">{cell_text(&document.text)}</td>
                                    <td>
                                        <a class="operation" href=detail_href>"Details"</a>
                                        <button
                                            class="operation"
                                            on:click=move |_| set_pending_delete.set(Some(delete_id.clone()))
                                        >
                                            "Delete"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            <Show when=move || pending_delete.get().is_some()>
                <div class="dialog-overlay" on:click=move |_| set_pending_delete.set(None)>
                    <div class="dialog" on:click=|ev| ev.stop_propagation()>
                        <h3>"Confirm Deletion"</h3>
                        <p>
                            "Are you sure you want to delete this news article? This action cannot be undone."
                        </p>
                        <div class="dialog-actions">
                            <button class="btn btn-secondary" on:click=move |_| set_pending_delete.set(None)>
                                "Cancel"
                            </button>
                            <button
                                class="btn btn-primary"
                                disabled=move || is_deleting.get()
                                on:click=on_confirm_delete
                            >
                                {move || if is_deleting.get() { "Deleting..." } else { "Confirm" }}
                            </button>
                        </div>
                    </div>
                </div>
            </Show>

            <StatusDialog
                status=status
                set_status=set_status
                success_text="Deletion Successful!"
                error_text="Deletion Failed. Please try again."
            />
        </div>
    }
}


#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use sentimatic_common::Document;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    /// Lets queued reactive updates reach the DOM.
    async fn settle() {
        for _ in 0..3 {
            let tick = js_sys::Promise::resolve(&wasm_bindgen::JsValue::UNDEFINED);
            JsFuture::from(tick).await.unwrap();
        }
    }

    fn stored(id: &str, label: &str) -> Document {
        Document {
            id: id.to_string(),
            sent_lab: label.to_string(),
            ..Document::default()
        }
    }

    fn row_numbers(host: &web_sys::Element) -> Vec<String> {
        let cells = host.query_selector_all("td.col-index").unwrap();
        (0..cells.length())
            .map(|i| cells.item(i).unwrap().text_content().unwrap_or_default())
            .collect()
    }

    #[wasm_bindgen_test]
    async fn test_rows_renumber_when_first_document_removed() {
        let store = DocumentStore::new();
        store.documents.set(vec![
            stored("a1", "Positive"),
            stored("b2", "Negative"),
            stored("c3", "Neutral"),
        ]);

        let dom = web_sys::window().unwrap().document().unwrap();
        let host = dom.create_element("div").unwrap();
        dom.body().unwrap().append_child(&host).unwrap();

        let handle = leptos::mount::mount_to(host.clone().dyn_into().unwrap(), move || {
            view! { <HistoryPage store=store /> }
        });
        settle().await;
        assert_eq!(row_numbers(&host), ["1", "2", "3"]);

        store.documents.update(|documents| {
            documents.remove(0);
        });
        settle().await;

        // The surviving rows keep their identity but renumber from one.
        assert_eq!(row_numbers(&host), ["1", "2"]);
        let labels = host.query_selector_all("td:nth-child(2)").unwrap();
        let first_label = labels.item(0).unwrap().text_content().unwrap_or_default();
        assert_eq!(first_label, "Negative");

        drop(handle);
        host.remove();
    }
}
