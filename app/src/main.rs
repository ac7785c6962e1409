// Go Getters Landing Page - Leptos 0.8 Edition

mod reveal;

use gogetters_page::components::{
    AboutSection, ContactSection, Footer, Header, Hero, ProjectsSection, TeamSection,
    TestimonialSection,
};
use gogetters_page::{current_year, styles::PAGE_CSS};
use leptos::prelude::*;
use reveal::Reveal;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    view! {
        <style>{PAGE_CSS}</style>
        <Header />
        <main>
            <Hero />
            <Reveal><AboutSection /></Reveal>
            <Reveal><TeamSection /></Reveal>
            <Reveal><ProjectsSection /></Reveal>
            <Reveal><TestimonialSection /></Reveal>
            <Reveal><ContactSection /></Reveal>
        </main>
        <Footer year=current_year() />
    }
}
