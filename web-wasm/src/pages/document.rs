//! Document detail page: word clouds and the highlighted press release.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::components::highlighted_text::HighlightedText;
use crate::components::word_cloud::WordCloud;
use sentimatic_common::Document;

/// Loads the document named by the `:id` route segment and renders its two
/// dictionary clouds next to the highlighted text. Until the fetch lands,
/// and when the id is unknown, a single placeholder line is shown.
#[component]
pub fn DocumentPage() -> impl IntoView {
    let params = use_params_map();
    let (data, set_data) = signal(None::<Document>);

    Effect::new(move |_| {
        let id = params.get().get("id").unwrap_or_default();
        set_data.set(None);
        if id.is_empty() {
            return;
        }
        spawn_local(async move {
            match api::fetch_document(&id).await {
                Ok(found) => set_data.set(found),
                Err(err) => gloo::console::error!(format!("fetching document failed: {:?}", err)),
            }
        });
    });

    view! {
        <div class="document">
            <Show
                when=move || data.get().is_some()
                fallback=|| view! { <p class="placeholder">"Loading or no data available"</p> }
            >
                {move || {
                    data.get().map(|document| {
                        view! {
                            <div class="clouds">
                                <div class="plot">
                                    <div class="plot-title">
                                        <div class="bar"></div>
                                        <h3>"Positive Sentiment Dictionary"</h3>
                                    </div>
                                    <WordCloud dict=document.pos_dict.clone() />
                                </div>
                                <div class="plot">
                                    <div class="plot-title">
                                        <div class="bar"></div>
                                        <h3>"Negative Sentiment Dictionary"</h3>
                                    </div>
                                    <WordCloud dict=document.neg_dict.clone() />
                                </div>
                            </div>
                            <div class="text-panel">
                                <HighlightedText
                                    text=document.text.clone()
                                    pos_dict=document.pos_dict.clone()
                                    neg_dict=document.neg_dict.clone()
                                />
                            </div>
                        }
                    })
                }}
            </Show>
        </div>
    }
}
