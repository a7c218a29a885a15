use dioxus::prelude::*;
use crate::components::shared::Spinner;
use crate::i18n::{use_locale, t};

/// The action card holding the generate button.
#[component]
pub fn GeneratePanel(loading: bool, on_generate: EventHandler<()>) -> Element {
    let locale = use_locale();
    let tr = t(*locale.read());

    rsx! {
        section { class: "generate-panel",
            h2 { class: "generate-title", "✦ {tr.generate_title}" }
            p { class: "generate-description", "{tr.generate_description}" }
            button {
                class: "generate-btn",
                disabled: loading,
                onclick: move |_| on_generate.call(()),
                if loading {
                    Spinner {}
                    "{tr.generating_label}"
                } else {
                    "✦ {tr.generate_button}"
                }
            }
        }
    }
}
