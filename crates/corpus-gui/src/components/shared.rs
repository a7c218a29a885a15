use dioxus::prelude::*;

/// Small pill label, e.g. "Dialogue 2".
#[component]
pub fn Badge(label: String) -> Element {
    rsx! {
        span { class: "badge", "{label}" }
    }
}

/// Rotating ring shown while a request is in flight.
#[component]
pub fn Spinner() -> Element {
    rsx! {
        span { class: "spinner", "aria-hidden": "true" }
    }
}
