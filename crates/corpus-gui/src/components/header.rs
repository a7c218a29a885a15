use dioxus::prelude::*;
use crate::i18n::{use_locale, t};

#[component]
pub fn Header(on_toggle_locale: EventHandler<()>) -> Element {
    let locale = *use_locale().read();
    let tr = t(locale);
    let toggle_label = locale.next().label();

    rsx! {
        header { class: "app-header",
            div { class: "app-header-icon", "ع" }
            h1 { class: "app-title", "{tr.app_title}" }
            p { class: "app-subtitle", "{tr.app_subtitle}" }
            button {
                class: "locale-toggle",
                onclick: move |_| on_toggle_locale.call(()),
                "{toggle_label}"
            }
        }
    }
}
