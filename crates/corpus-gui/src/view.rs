//! Projection of dialogues into what the cards draw.
//!
//! Nothing here touches Dioxus; components only read these structs.

use corpus_models::{Dialogue, Message, Speaker};

use crate::i18n::{self, Locale};

/// Which edge of the card a bubble hugs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Right,
    Left,
}

impl Side {
    /// Speaker A talks from the right, speaker B from the left.
    pub fn of(speaker: Speaker) -> Self {
        match speaker {
            Speaker::A => Side::Right,
            Speaker::B => Side::Left,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Side::Right => "bubble bubble-right",
            Side::Left => "bubble bubble-left",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BubbleView {
    pub speaker: Speaker,
    pub side: Side,
    pub text: String,
}

/// One row of the conversation. Both sides empty is a valid, blank row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnView {
    pub position: usize,
    pub right: Option<BubbleView>,
    pub left: Option<BubbleView>,
}

impl TurnView {
    fn project(position: usize, message: &Message) -> Self {
        let bubble = |speaker: Speaker| {
            message.line(speaker).map(|text| BubbleView {
                speaker,
                side: Side::of(speaker),
                text: text.to_string(),
            })
        };
        Self {
            position,
            right: bubble(Speaker::A),
            left: bubble(Speaker::B),
        }
    }

    /// Bubbles in display order: right first, then left.
    pub fn bubbles(&self) -> impl Iterator<Item = &BubbleView> {
        self.right.iter().chain(self.left.iter())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub index: usize,
    pub topic: String,
    pub turns: Vec<TurnView>,
}

impl CardView {
    pub fn project(dialogue: &Dialogue, index: usize) -> Self {
        Self {
            index,
            topic: dialogue.topic.clone(),
            turns: dialogue
                .turns
                .iter()
                .enumerate()
                .map(|(position, message)| TurnView::project(position, message))
                .collect(),
        }
    }

    /// 1-based number shown in the badge.
    pub fn number(&self) -> usize {
        self.index + 1
    }

    pub fn message_count(&self) -> usize {
        self.turns.len()
    }

    pub fn footer(&self, locale: Locale) -> String {
        i18n::message_count(locale, self.message_count())
    }
}

pub fn project_all(dialogues: &[Dialogue]) -> Vec<CardView> {
    dialogues
        .iter()
        .enumerate()
        .map(|(index, dialogue)| CardView::project(dialogue, index))
        .collect()
}
