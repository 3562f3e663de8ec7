//! Page footer.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p>"Sentimatic, sentiment analysis for press releases."</p>
        </footer>
    }
}
