//! Outcome dialog shared by the submission and history pages.

use leptos::prelude::*;

/// Outcome of a finished backend operation.
#[derive(Clone, Copy, PartialEq)]
pub enum Status {
    Success,
    Error,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Success => "success",
            Status::Error => "error",
        }
    }
}

/// Overlay dialog shown while `status` holds an outcome. Clicking anywhere
/// dismisses it by clearing the signal.
#[component]
pub fn StatusDialog(
    status: ReadSignal<Option<Status>>,
    set_status: WriteSignal<Option<Status>>,
    success_text: &'static str,
    error_text: &'static str,
) -> impl IntoView {
    view! {
        <Show when=move || status.get().is_some()>
            <div class="dialog-overlay" on:click=move |_| set_status.set(None)>
                {move || {
                    status.get().map(|status| {
                        let text = match status {
                            Status::Success => success_text,
                            Status::Error => error_text,
                        };
                        view! { <div class=format!("alert {}", status.as_str())>{text}</div> }
                    })
                }}
            </div>
        </Show>
    }
}
