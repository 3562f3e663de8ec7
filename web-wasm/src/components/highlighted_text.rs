//! Sentiment-highlighted rendering of a document body.

use leptos::prelude::*;
use sentimatic_common::{highlight_lines, HighlightSegment, SentimentDictionary};

/// Renders the document text line by line with dictionary words colored by
/// polarity and their scores attached as tooltips. If the highlighter cannot
/// build its matcher the text is still shown, just unhighlighted.
#[component]
pub fn HighlightedText(
    text: String,
    pos_dict: SentimentDictionary,
    neg_dict: SentimentDictionary,
) -> impl IntoView {
    let lines = match highlight_lines(&text, &pos_dict, &neg_dict) {
        Ok(lines) => lines,
        Err(err) => {
            gloo::console::error!(format!("highlighting failed: {}", err));
            text.split('\n')
                .map(|line| vec![HighlightSegment::Plain(line.to_string())])
                .collect()
        }
    };

    let line_count = lines.len();
    view! {
        <div class="highlighted-text">
            {lines
                .into_iter()
                .enumerate()
                .map(|(index, segments)| {
                    // Line breaks separate lines; none after the last.
                    let separator = (index + 1 < line_count).then(|| view! { <br /> });
                    view! {
                        {segments.into_iter().map(render_segment).collect_view()}
                        {separator}
                    }
                })
                .collect_view()}
        </div>
    }
}

fn render_segment(segment: HighlightSegment) -> impl IntoView {
    let (class, tooltip, text): (Option<&'static str>, Option<String>, String) = match segment {
        HighlightSegment::Plain(text) => (None, None, text),
        HighlightSegment::Positive { word, score } => {
            (Some("highlight positive"), Some(format!("Score: {}", score)), word)
        }
        HighlightSegment::Negative { word, score } => {
            (Some("highlight negative"), Some(format!("Score: {}", score)), word)
        }
    };

    view! {
        <span class=class title=tooltip>
            {text}
        </span>
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_break_rendered_between_lines_only() {
        let dom = web_sys::window().unwrap().document().unwrap();
        let host = dom.create_element("div").unwrap();
        dom.body().unwrap().append_child(&host).unwrap();

        let handle = leptos::mount::mount_to(host.clone().dyn_into().unwrap(), || {
            view! {
                <HighlightedText
                    text="alpha\nomega".to_string()
                    pos_dict=SentimentDictionary::new()
                    neg_dict=SentimentDictionary::new()
                />
            }
        });

        let breaks = host.query_selector_all("br").unwrap();
        assert_eq!(breaks.length(), 1);

        // The one break sits between the lines, not after the last one.
        let html = host.inner_html();
        let break_at = html.find("<br>").unwrap();
        assert!(html.find("alpha").unwrap() < break_at);
        assert!(break_at < html.find("omega").unwrap());

        drop(handle);
        host.remove();
    }

    #[wasm_bindgen_test]
    fn test_single_line_has_no_break() {
        let dom = web_sys::window().unwrap().document().unwrap();
        let host = dom.create_element("div").unwrap();
        dom.body().unwrap().append_child(&host).unwrap();

        let handle = leptos::mount::mount_to(host.clone().dyn_into().unwrap(), || {
            view! {
                <HighlightedText
                    text="alpha".to_string()
                    pos_dict=SentimentDictionary::new()
                    neg_dict=SentimentDictionary::new()
                />
            }
        });

        assert_eq!(host.query_selector_all("br").unwrap().length(), 0);

        drop(handle);
        host.remove();
    }
}
