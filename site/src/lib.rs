//! # gogetters-page
//!
//! Leptos renderer for the Go Getters team page.
//!
//! This crate holds the page content, the section components, and the CSS,
//! and renders the complete static HTML document. The interactive browser
//! build lives in the `app` crate, which mounts the same components
//! client-side and adds the scroll-reveal behavior.
//!
//! ## Quick Start
//!
//! ```rust
//! use gogetters_page::{current_year, render_page};
//!
//! let html = render_page(current_year());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//!
//! // Write to file
//! // std::fs::write("gogetters.html", html)?;
//! ```
//!
//! ## Architecture
//!
//! - [`content`] - literal content tables (values, roster, projects)
//! - [`components`] - Leptos UI components, one file per section
//! - [`styles`] - the page CSS constant
//! - [`reveal`] - one-shot latch behind the scroll-reveal wrapper
//!
//! ## Leptos 0.8 SSR
//!
//! Rendering uses Leptos 0.8's `RenderHtml` trait; no reactive runtime or
//! hydration is involved, the output is plain static HTML.

pub mod components;
pub mod content;
pub mod reveal;
pub mod styles;

#[cfg(feature = "ssr")]
use components::PageDocument;
#[cfg(feature = "ssr")]
use leptos::prelude::*;
#[cfg(feature = "ssr")]
use leptos::tachys::view::RenderHtml;

/// Render the complete page as a static HTML document.
///
/// `year` is the calendar year shown in the footer; callers normally pass
/// [`current_year`], tests pass fixed values.
#[cfg(feature = "ssr")]
pub fn render_page(year: i32) -> String {
    let doc = view! { <PageDocument year=year /> };

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", doc.to_html())
}

/// Current calendar year from the system clock.
#[cfg(not(target_arch = "wasm32"))]
pub fn current_year() -> i32 {
    use chrono::Datelike;
    chrono::Local::now().year()
}

/// Current calendar year from the browser clock.
#[cfg(target_arch = "wasm32")]
pub fn current_year() -> i32 {
    js_sys::Date::new_0().get_full_year() as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use content::{ProjectHighlight, CORE_VALUES, PROJECT_HIGHLIGHTS, TEAM_MEMBERS};
    use pretty_assertions::assert_eq;

    fn page() -> String {
        render_page(2025)
    }

    #[test]
    fn renders_complete_document() {
        let html = page();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("GO GETTERS"));
        assert!(html.contains("Who We Are"));
        assert!(html.contains("Our Team"));
        assert!(html.contains("What We Do"));
        assert!(html.contains("What People Say"));
        assert!(html.contains("Let’s Connect"));
    }

    #[test]
    fn header_links_to_every_section_anchor() {
        let html = page();

        for anchor in ["#about", "#team", "#projects", "#contact"] {
            assert!(html.contains(&format!("href=\"{anchor}\"")), "missing {anchor}");
        }
        // and the anchors resolve to rendered ids
        for id in ["about", "team", "projects", "contact"] {
            assert!(html.contains(&format!("id=\"{id}\"")), "missing id {id}");
        }
    }

    #[test]
    fn one_tile_per_core_value_in_table_order() {
        let html = page();

        assert_eq!(
            html.matches("class=\"value-card\"").count(),
            CORE_VALUES.len()
        );

        let positions: Vec<_> = CORE_VALUES
            .iter()
            .map(|v| html.find(v.name).expect("core value rendered"))
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted, "tiles must keep table order");
    }

    #[test]
    fn one_card_per_team_member() {
        let html = page();

        assert_eq!(
            html.matches("class=\"card team-card\"").count(),
            TEAM_MEMBERS.len()
        );
        for member in TEAM_MEMBERS {
            assert!(html.contains(member.name), "missing {}", member.name);
        }
    }

    #[test]
    fn captain_leads_the_team_grid() {
        let html = page();

        assert!(html.contains("Alen Jofi (Captain)"));
        assert!(html.contains("“Leading with vision and passion.”"));
        assert!(
            html.find("Alen Jofi").unwrap() < html.find("Aleena").unwrap(),
            "captain tile must precede the vice-captain tile"
        );
    }

    #[test]
    fn quotes_render_wrapped_in_quotation_marks() {
        let html = page();

        for member in TEAM_MEMBERS {
            assert!(html.contains(&format!("“{}”", member.quote)));
        }
    }

    #[test]
    fn single_project_renders_single_card() {
        let html = page();

        assert_eq!(PROJECT_HIGHLIGHTS.len(), 1);
        assert_eq!(html.matches("class=\"card project-card\"").count(), 1);
        assert!(html.contains("GymX Advertisement Campaign"));
    }

    #[test]
    fn projects_section_is_data_driven() {
        use components::ProjectsSection;

        const TWO: &[ProjectHighlight] = &[
            ProjectHighlight {
                title: "Campaign One",
                description: "First.",
            },
            ProjectHighlight {
                title: "Campaign Two",
                description: "Second.",
            },
        ];

        let html = view! { <ProjectsSection projects=TWO /> }.to_html();

        assert_eq!(html.matches("class=\"card project-card\"").count(), 2);
        assert!(html.contains("Campaign One"));
        assert!(html.contains("Campaign Two"));
    }

    #[test]
    fn footer_year_follows_the_clock() {
        let one = render_page(2031);
        let two = render_page(2032);

        assert!(one.contains("© 2031 Driven By Determination, United by Success."));
        assert!(two.contains("© 2032 Driven By Determination, United by Success."));
        assert!(!one.contains("2032"));
    }

    #[test]
    fn current_year_is_sane() {
        assert!(current_year() >= 2025);
    }

    #[test]
    fn contact_form_is_display_only() {
        let html = page();

        for placeholder in ["Your Name", "Your Email", "Your Message"] {
            assert!(html.contains(&format!("placeholder=\"{placeholder}\"")));
        }
        assert!(html.contains("Send Message"));
        // no submission path is wired
        assert!(!html.contains("action="));
        assert!(!html.contains("on:submit"));
    }
}
