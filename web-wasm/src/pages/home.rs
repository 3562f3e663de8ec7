//! Submission page.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::app::DocumentStore;
use crate::components::status_dialog::{Status, StatusDialog};

/// Text box plus submit and reset, with an outcome dialog on top. The
/// submit button stays disabled while a request is in flight, and the
/// history is refreshed whichever way the request ends.
#[component]
pub fn HomePage(store: DocumentStore) -> impl IntoView {
    let (text, set_text) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (status, set_status) = signal(None::<Status>);

    let on_submit = move |_| {
        let input = text.get();

        // Blank input fails fast; no request leaves the browser and the
        // in-flight flag is never raised.
        if input.trim().is_empty() {
            set_status.set(Some(Status::Error));
            return;
        }

        set_is_submitting.set(true);
        spawn_local(async move {
            match api::submit_text(&input).await {
                Ok(()) => {
                    set_text.set(String::new());
                    set_status.set(Some(Status::Success));
                }
                Err(err) => {
                    gloo::console::error!(format!("submission failed: {:?}", err));
                    set_status.set(Some(Status::Error));
                }
            }
            set_is_submitting.set(false);
            store.refresh();
        });
    };

    view! {
        <div class="home">
            <div class="logo">
                <h2>"Sentimatic"</h2>
            </div>
            <div class="text-area">
                <textarea
                    placeholder="Please Enter Your Press Release Here."
                    prop:value=move || text.get()
                    on:input=move |ev| set_text.set(event_target_value(&ev))
                ></textarea>
                <div class="buttons">
                    <button class="btn btn-secondary" on:click=move |_| set_text.set(String::new())>
                        "Reset"
                    </button>
                    <button
                        class="btn btn-primary"
                        disabled=move || is_submitting.get()
                        on:click=on_submit
                    >
                        {move || if is_submitting.get() { "Submitting..." } else { "Submit" }}
                    </button>
                </div>
            </div>

            <StatusDialog
                status=status
                set_status=set_status
                success_text="Submission Successful!"
                error_text="Submission Failed. Please try again."
            />
        </div>
    }
}
