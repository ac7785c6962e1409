use leptos::prelude::*;

/// Copyright line with the team slogan.
///
/// The year comes from the caller so the clock stays a seam; pass
/// [`crate::current_year`] for the real page.
#[component]
pub fn Footer(
    /// Calendar year shown in the copyright line
    year: i32,
) -> impl IntoView {
    view! {
        <footer class="footer">
            <p class="footer-copyright">
                {format!("© {year} Driven By Determination, United by Success.")}
            </p>
        </footer>
    }
}
