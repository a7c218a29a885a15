use chrono::{DateTime, Utc};
use corpus_models::{Dialogue, Speaker};
use dioxus::prelude::*;

use crate::components::shared::Badge;
use crate::i18n::{self, use_locale, t, ARABIC_LANGUAGE_TAG};
use crate::view::{self, BubbleView, CardView};

/// Results section: count header followed by one card per dialogue.
#[component]
pub fn DialogueList(dialogues: Vec<Dialogue>, fetched_at: DateTime<Utc>) -> Element {
    let locale = *use_locale().read();
    let tr = t(locale);
    let cards = view::project_all(&dialogues);
    let count_label = i18n::conversations_generated(locale, cards.len());
    let time_label = format!("{} {} UTC", tr.generated_at, fetched_at.format("%H:%M:%S"));

    rsx! {
        section { class: "results",
            div { class: "results-header",
                h2 { "{tr.generated_dialogues}" }
                p { class: "muted", "{count_label}" }
                p { class: "muted results-time", "{time_label}" }
            }
            div { class: "card-grid",
                for card in cards.iter() {
                    DialogueCard { key: "{card.index}", card: card.clone() }
                }
            }
        }
    }
}

#[component]
pub fn DialogueCard(card: CardView) -> Element {
    let locale = *use_locale().read();
    let tr = t(locale);
    let badge = format!("{} {}", tr.dialogue_badge, card.number());
    let footer = card.footer(locale);

    rsx! {
        article { class: "dialogue-card",
            div { class: "card-header",
                div { class: "card-title",
                    span { class: "card-icon", "💬" }
                    h3 { dir: "auto", "{card.topic}" }
                }
                Badge { label: badge }
            }
            ol { class: "turns",
                for turn in card.turns.iter() {
                    li { key: "{turn.position}", class: "turn",
                        for bubble in turn.bubbles() {
                            Bubble { bubble: bubble.clone() }
                        }
                    }
                }
            }
            div { class: "card-footer",
                span { "{footer}" }
                span { class: "font-arabic", lang: "ar", "{ARABIC_LANGUAGE_TAG}" }
            }
        }
    }
}

/// One speaker's line, aligned to the speaker's side.
#[component]
fn Bubble(bubble: BubbleView) -> Element {
    let locale = *use_locale().read();
    let tr = t(locale);
    let (speaker_label, avatar) = match bubble.speaker {
        Speaker::A => (tr.speaker_a, "👤"),
        Speaker::B => (tr.speaker_b, "🤖"),
    };
    let class = bubble.side.class();

    rsx! {
        div { class: "{class}",
            div { class: "bubble-speaker",
                span { class: "bubble-avatar", "{avatar}" }
                span { class: "bubble-label", "{speaker_label}" }
            }
            p { class: "bubble-text", dir: "auto", "{bubble.text}" }
        }
    }
}
