use dioxus::prelude::*;
use crate::i18n::{use_locale, t};

#[component]
pub fn ErrorAlert(message: String, on_dismiss: EventHandler<()>) -> Element {
    let locale = use_locale();
    let tr = t(*locale.read());

    rsx! {
        div { class: "alert alert-error", role: "alert",
            span { class: "alert-icon", "⚠" }
            div { class: "alert-body",
                strong { class: "alert-title", "{tr.error_title}" }
                p { class: "alert-message", "{message}" }
            }
            button {
                class: "alert-dismiss",
                title: "{tr.dismiss}",
                onclick: move |_| on_dismiss.call(()),
                "×"
            }
        }
    }
}
