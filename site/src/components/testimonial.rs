use crate::content::TESTIMONIAL;
use leptos::prelude::*;

/// "What People Say": the single client quote. No iteration.
#[component]
pub fn TestimonialSection() -> impl IntoView {
    view! {
        <section id="testimonials" class="section section-testimonials">
            <div class="container">
                <h2 class="section-title">"What People Say"</h2>
                <blockquote class="testimonial-quote">
                    {format!("“{}”", TESTIMONIAL.quote)}
                </blockquote>
                <p class="testimonial-attribution">{TESTIMONIAL.attribution}</p>
            </div>
        </section>
    }
}
