//! Scroll-triggered reveal wrapper.
//!
//! Wrapped sections start invisible and offset downward; the first time one
//! becomes substantially visible in the viewport it transitions to its
//! resting state and stays there. The one-shot latch lives in
//! `gogetters_page::reveal` so it stays testable off-browser; this module
//! wires it to an `IntersectionObserver` and the `.reveal` CSS pair.

use gogetters_page::reveal::RevealLatch;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Fraction of a section that must be visible before it reveals.
pub const DEFAULT_THRESHOLD: f64 = 0.25;

#[component]
pub fn Reveal(
    #[prop(default = DEFAULT_THRESHOLD)] threshold: f64,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let (revealed, set_revealed) = signal(false);

    Effect::new(move || {
        let Some(el) = node_ref.get() else {
            return;
        };

        let mut latch = RevealLatch::new(threshold);
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if latch.observe(entry.intersection_ratio()) {
                        set_revealed.set(true);
                        observer.disconnect();
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));

        if let Ok(observer) =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
        {
            observer.observe(&el);
        }

        callback.forget(); // Keep the closure alive
    });

    view! {
        <div
            node_ref=node_ref
            class=move || if revealed.get() { "reveal revealed" } else { "reveal" }
        >
            {children()}
        </div>
    }
}
