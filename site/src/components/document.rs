//! Root document component - the complete HTML page

use super::{
    AboutSection, ContactSection, Footer, Header, Hero, ProjectsSection, TeamSection,
    TestimonialSection,
};
use crate::styles::PAGE_CSS;
use leptos::prelude::*;

/// The complete HTML document for the page, sections in authorial order
#[component]
pub fn PageDocument(
    /// Calendar year passed through to the footer
    year: i32,
) -> impl IntoView {
    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>"Go Getters | Creative Team Portfolio"</title>
                <style>{PAGE_CSS}</style>
            </head>
            <body>
                <Header />
                <main>
                    <Hero />
                    <AboutSection />
                    <TeamSection />
                    <ProjectsSection />
                    <TestimonialSection />
                    <ContactSection />
                </main>
                <Footer year=year />
            </body>
        </html>
    }
}
