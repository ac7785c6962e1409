use leptos::prelude::*;

/// Fixed overlay bar with the brand label and in-page anchors.
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <span class="header-brand">"Go Getters"</span>
            <nav class="header-links">
                <a href="#about">"About"</a>
                <a href="#team">"Team"</a>
                <a href="#projects">"Work"</a>
                <a href="#contact">"Contact"</a>
            </nav>
        </header>
    }
}
