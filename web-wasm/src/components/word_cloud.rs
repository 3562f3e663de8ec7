//! Word-cloud panel over one sentiment dictionary.

use leptos::prelude::*;
use sentimatic_common::{build_cloud, SentimentDictionary};

/// Renders every dictionary word sized by its score, largest first. The raw
/// score is shown as a tooltip. An empty dictionary renders an empty panel.
#[component]
pub fn WordCloud(dict: SentimentDictionary) -> impl IntoView {
    let words = build_cloud(&dict);

    view! {
        <div class="word-cloud">
            {words
                .into_iter()
                .map(|entry| {
                    let style = format!("font-size: {}px; color: {};", entry.size, entry.color);
                    let tooltip = format!("Score: {}", entry.score);
                    view! {
                        <span class="cloud-word" style=style title=tooltip>
                            {entry.word}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}
