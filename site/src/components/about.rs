use crate::content::{self, CoreValue};
use leptos::prelude::*;

/// "Who We Are": intro copy plus one tile per core value, in table order.
#[component]
pub fn AboutSection(
    /// Core values to render; defaults to the page content table
    #[prop(default = content::CORE_VALUES)]
    values: &'static [CoreValue],
) -> impl IntoView {
    view! {
        <section id="about" class="section section-about">
            <div class="container">
                <h2 class="section-title">"Who We Are"</h2>
                <p class="section-description">
                    "Go Getters is a team of driven professionals brought together by our manager "
                    "to deliver memorable solutions, fresh ideas, and unbeatable energy. We believe "
                    "in achieving more—together."
                </p>
                <div class="values-grid">
                    {values.iter().map(|value| view! {
                        <div class="value-card">
                            <h3 class="value-name">{value.name}</h3>
                            <p class="value-blurb">"Our core value at Go Getters."</p>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
