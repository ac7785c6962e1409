//! Visual primitives shared by the page sections.
//!
//! The sections only need two primitives: a clickable action and a
//! bordered content container. Anything conforming to those contracts
//! could replace this module.

use leptos::prelude::*;

/// Clickable action.
///
/// Renders an anchor styled as a button when `href` is given, otherwise a
/// plain (inert) button element.
#[component]
pub fn Button(
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
    /// Link target; omit for a non-navigating button
    #[prop(optional)]
    href: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let class = if class.is_empty() {
        "btn".to_string()
    } else {
        format!("btn {class}")
    };

    match href {
        Some(href) => view! { <a href=href class=class>{children()}</a> }.into_any(),
        None => view! { <button type="button" class=class>{children()}</button> }.into_any(),
    }
}

/// Bordered content container.
#[component]
pub fn Card(
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let class = if class.is_empty() {
        "card".to_string()
    } else {
        format!("card {class}")
    };

    view! { <article class=class>{children()}</article> }
}

/// Inner padding wrapper for [`Card`].
#[component]
pub fn CardContent(children: Children) -> impl IntoView {
    view! { <div class="card-content">{children()}</div> }
}
