//! Leptos UI components, one file per page section.
//!
//! # Component Hierarchy
//!
//! ```text
//! PageDocument
//! ├── Header
//! ├── Hero
//! ├── AboutSection      (one tile per CoreValue)
//! ├── TeamSection       (one Card per TeamMember)
//! ├── ProjectsSection   (one Card per ProjectHighlight, barbell icon)
//! ├── TestimonialSection
//! ├── ContactSection    (display-only form)
//! └── Footer            (year from the caller)
//! ```
//!
//! Sections are self-contained and can be composed freely; the browser app
//! mounts them individually inside its reveal wrapper instead of going
//! through [`PageDocument`].

mod about;
mod contact;
mod document;
mod footer;
mod header;
mod hero;
mod icons;
mod projects;
mod team;
mod testimonial;
mod ui;

pub use about::AboutSection;
pub use contact::ContactSection;
pub use document::PageDocument;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use icons::{Icon, ICON_BARBELL};
pub use projects::ProjectsSection;
pub use team::TeamSection;
pub use testimonial::TestimonialSection;
pub use ui::{Button, Card, CardContent};
