use super::Button;
use leptos::prelude::*;

/// "Let’s Connect": display-only contact form.
///
/// Three labeled fields and a submit control, none of it wired; no
/// submission path exists in this version of the page.
#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="section section-contact">
            <div class="container">
                <h2 class="section-title">"Let’s Connect"</h2>
                <p class="section-description">
                    "Reach out, collaborate, or join the Go Getters family!"
                </p>
                <form class="contact-form">
                    <div class="field">
                        <label>"Name"</label>
                        <input type="text" id="name" placeholder="Your Name" />
                    </div>
                    <div class="field">
                        <label>"Email"</label>
                        <input type="email" id="email" placeholder="Your Email" />
                    </div>
                    <div class="field">
                        <label>"Message"</label>
                        <textarea id="message" placeholder="Your Message" rows="4"></textarea>
                    </div>
                    <Button class="btn-submit">"Send Message"</Button>
                </form>
            </div>
        </section>
    }
}
