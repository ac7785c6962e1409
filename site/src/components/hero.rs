use super::Button;
use leptos::prelude::*;

/// Full-height opening banner.
///
/// Title and description carry the `rise-in` entrance animation; it plays
/// on initial display, not on scroll.
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <h1 class="hero-title">"GO GETTERS"</h1>
            <p class="hero-description">
                "Meet the team that gets it done. We are Go Getters—a creative crew driven by "
                "passion, collaboration, and results."
            </p>
            <Button class="btn-primary" href="#about">"Explore Our Story"</Button>
        </section>
    }
}
