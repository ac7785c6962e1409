//! CSS for the page.
//!
//! One constant holds the complete stylesheet; the static document inlines
//! it in a `<style>` tag and the browser app injects the same constant, so
//! both renderings share a single source of truth.
//!
//! To extend or override styles:
//!
//! ```rust
//! use gogetters_page::styles::PAGE_CSS;
//!
//! let my_css = ".custom-class { color: red; }";
//! let combined = format!("{}\n{}", PAGE_CSS, my_css);
//! ```

/// Complete CSS for the page - light theme, dark hero and footer.
///
/// Covers:
/// - Base typography and the section layout grid
/// - Overlay header and the full-height hero with its entrance animation
/// - Card grids for values, team, and projects
/// - The `.reveal` / `.revealed` pair backing the scroll-reveal wrapper
/// - Contact form and footer
pub const PAGE_CSS: &str = r#"
:root {
    --bg-page: #f9fafb;
    --bg-alt: #f3f4f6;
    --bg-dark: #111827;
    --text-main: #111827;
    --text-muted: #6b7280;
    --text-faint: #9ca3af;
    --text-on-dark: #d1d5db;
    --accent: #2563eb;
    --accent-strong: #1d4ed8;
    --accent-title: #3b82f6;
    --border-card: #e5e7eb;
    --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;
    --container-max: 1152px;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    min-height: 100vh;
    background: var(--bg-page);
    color: var(--text-main);
    font-family: var(--font-sans);
    line-height: 1.5;
}

.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 24px;
}

/* Overlay header */

.header {
    position: absolute;
    top: 0;
    left: 0;
    width: 100%;
    z-index: 10;
    padding: 24px;
    display: flex;
    justify-content: space-between;
    align-items: center;
}

.header-brand {
    font-size: 20px;
    font-weight: 700;
    color: #ffffff;
}

.header-links a {
    margin-left: 24px;
    color: var(--text-on-dark);
    text-decoration: none;
    transition: color 0.2s;
}

.header-links a:hover {
    color: #ffffff;
}

/* Hero */

.hero {
    position: relative;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    height: 100vh;
    text-align: center;
    background: var(--bg-dark);
    color: #ffffff;
}

.hero-title {
    margin: 0;
    font-size: 72px;
    font-weight: 800;
    letter-spacing: -0.025em;
    color: var(--accent-title);
    animation: rise-in 1s ease-out both;
}

.hero-description {
    margin: 16px 24px 0;
    max-width: 576px;
    font-size: 20px;
    color: var(--text-on-dark);
    animation: rise-in 1s ease-out both;
}

@keyframes rise-in {
    from {
        opacity: 0;
        transform: translateY(20px);
    }
    to {
        opacity: 1;
        transform: none;
    }
}

/* Buttons */

.btn {
    display: inline-block;
    border: none;
    cursor: pointer;
    font: inherit;
    text-decoration: none;
}

.btn-primary {
    margin-top: 32px;
    padding: 12px 24px;
    border-radius: 9999px;
    background: var(--accent);
    color: #ffffff;
    font-size: 18px;
    transition: background 0.2s;
}

.btn-primary:hover {
    background: var(--accent-strong);
}

/* Sections */

.section {
    padding: 80px 0;
    text-align: center;
}

.section-about,
.section-projects {
    background: #ffffff;
}

.section-team {
    background: var(--bg-alt);
}

.section-testimonials {
    background: var(--bg-page);
}

.section-title {
    margin: 0 0 24px;
    font-size: 36px;
    font-weight: 700;
}

.section-description {
    margin: 0 auto 40px;
    max-width: 768px;
    font-size: 18px;
    color: var(--text-muted);
}

/* Core values */

.values-grid {
    display: grid;
    grid-template-columns: repeat(2, 1fr);
    gap: 32px;
}

.value-card {
    padding: 24px;
    border-radius: 16px;
    background: var(--bg-page);
    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.07);
    transition: box-shadow 0.2s;
}

.value-card:hover {
    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
}

.value-name {
    margin: 0 0 8px;
    font-size: 20px;
    font-weight: 600;
}

.value-blurb {
    margin: 0;
    font-size: 14px;
    color: var(--text-faint);
}

/* Cards */

.card {
    background: #ffffff;
    border: 1px solid var(--border-card);
    border-radius: 12px;
    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.07);
    overflow: hidden;
}

.card-content {
    padding: 24px;
    display: flex;
    flex-direction: column;
    align-items: center;
}

/* Team */

.team-grid {
    display: grid;
    grid-template-columns: repeat(2, 1fr);
    gap: 32px;
}

.team-card {
    cursor: pointer;
    transition: transform 0.2s;
}

.team-card:hover {
    transform: scale(1.05);
}

.member-name {
    margin: 0;
    font-size: 18px;
    font-weight: 600;
}

.member-quote {
    margin: 8px 0 0;
    font-size: 14px;
    color: var(--text-muted);
}

/* Projects */

.projects-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 40px;
}

.project-card {
    text-align: center;
    transition: box-shadow 0.2s;
}

.project-card:hover {
    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
}

.project-icon-ring {
    width: 96px;
    height: 96px;
    margin-bottom: 24px;
    border-radius: 50%;
    background: var(--bg-alt);
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
    display: flex;
    align-items: center;
    justify-content: center;
}

.project-icon {
    color: var(--text-faint);
}

.project-title {
    margin: 0 0 8px;
    font-size: 24px;
    font-weight: 600;
}

.project-description {
    margin: 0;
    font-size: 14px;
    color: var(--text-muted);
}

/* Testimonial */

.testimonial-quote {
    margin: 0;
    font-size: 18px;
    font-style: italic;
    color: var(--text-muted);
}

.testimonial-attribution {
    margin: 16px 0 0;
    color: var(--text-faint);
}

/* Contact */

.section-contact {
    background: var(--accent);
    color: #ffffff;
}

.section-contact .section-description {
    color: #ffffff;
}

.contact-form {
    max-width: 448px;
    margin: 0 auto;
    text-align: left;
}

.field {
    margin-bottom: 16px;
}

.field label {
    display: block;
    margin-bottom: 4px;
    font-size: 14px;
    font-weight: 500;
}

.field input,
.field textarea {
    width: 100%;
    padding: 12px;
    border: none;
    border-radius: 6px;
    color: var(--text-main);
    font: inherit;
}

.btn-submit {
    width: 100%;
    padding: 12px;
    border-radius: 6px;
    background: #ffffff;
    color: var(--accent);
    font-size: 16px;
    transition: background 0.2s;
}

.btn-submit:hover {
    background: var(--bg-alt);
}

/* Footer */

.footer {
    padding: 40px 0;
    background: var(--bg-dark);
    color: var(--text-faint);
    text-align: center;
}

.footer-copyright {
    margin: 0;
}

/* Scroll reveal: sections wait in `reveal`, the observer flips them to
   `revealed` exactly once */

.reveal {
    opacity: 0;
    transform: translateY(30px);
    transition: opacity 0.7s ease-out, transform 0.7s ease-out;
}

.reveal.revealed {
    opacity: 1;
    transform: none;
}

/* Wider layouts */

@media (min-width: 768px) {
    .values-grid,
    .team-grid {
        grid-template-columns: repeat(4, 1fr);
    }

    .projects-grid {
        grid-template-columns: repeat(2, 1fr);
    }
}

@media (prefers-reduced-motion: reduce) {
    .hero-title,
    .hero-description {
        animation: none;
    }

    .reveal {
        opacity: 1;
        transform: none;
        transition: none;
    }
}
"#;
