//! Top navigation bar.

use leptos::prelude::*;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <div class="left">
                <a class="brand" href="/">"Sentimatic"</a>
                <div class="tags">
                    <a class="tag" href="/">"Home"</a>
                    <a class="tag" href="/history">"History"</a>
                </div>
            </div>
            <div class="right">
                <div class="title">
                    <h1>"Sentimatic"</h1>
                    <p>"Unlock Insights in Every Word."</p>
                </div>
            </div>
        </nav>
    }
}
