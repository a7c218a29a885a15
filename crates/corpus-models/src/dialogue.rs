//! Dialogue and turn types.
//!
//! A [`Dialogue`] is a titled, ordered sequence of [`Message`] turns between
//! two fixed speakers. Turn order is array position; messages carry no ids
//! or timestamps.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Speaker
// ---------------------------------------------------------------------------

/// One of the two fixed speaker roles of a dialogue.
///
/// The display form matches the wire key (`"A"` / `"B"`).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(strum::Display, strum::EnumString, strum::EnumIter)]
pub enum Speaker {
    /// First speaker, wire key `A`.
    A,
    /// Second speaker, wire key `B`.
    B,
}

// ---------------------------------------------------------------------------
// Message
// ---------------------------------------------------------------------------

/// A single turn of a dialogue.
///
/// Normally exactly one side is populated. A turn with neither side set is
/// still valid and keeps its slot in the sequence.
///
/// # Examples
///
/// ```
/// use corpus_models::{Message, Speaker};
///
/// let turn = Message::new(Speaker::A, "مرحبا");
/// assert_eq!(turn.line(Speaker::A), Some("مرحبا"));
/// assert_eq!(turn.line(Speaker::B), None);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    /// What speaker A says in this turn.
    #[serde(rename = "A", default, skip_serializing_if = "Option::is_none")]
    pub speaker_a: Option<String>,
    /// What speaker B says in this turn.
    #[serde(rename = "B", default, skip_serializing_if = "Option::is_none")]
    pub speaker_b: Option<String>,
}

impl Message {
    /// Create a turn spoken by `speaker`.
    pub fn new(speaker: Speaker, text: impl Into<String>) -> Self {
        let text = Some(text.into());
        match speaker {
            Speaker::A => Self {
                speaker_a: text,
                speaker_b: None,
            },
            Speaker::B => Self {
                speaker_a: None,
                speaker_b: text,
            },
        }
    }

    /// The line spoken by `speaker`, if any.
    ///
    /// An empty string is treated the same as an absent field.
    pub fn line(&self, speaker: Speaker) -> Option<&str> {
        let field = match speaker {
            Speaker::A => &self.speaker_a,
            Speaker::B => &self.speaker_b,
        };
        field.as_deref().filter(|text| !text.is_empty())
    }

    /// `true` when neither speaker says anything in this turn.
    pub fn is_empty(&self) -> bool {
        self.line(Speaker::A).is_none() && self.line(Speaker::B).is_none()
    }
}

// ---------------------------------------------------------------------------
// Dialogue
// ---------------------------------------------------------------------------

/// A generated conversation on one topic.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Dialogue {
    /// Conversation topic, shown as the card title.
    pub topic: String,
    /// Turns in speaking order.
    #[serde(rename = "dialogue")]
    pub turns: Vec<Message>,
}

impl Dialogue {
    /// Create a dialogue from its topic and turns.
    pub fn new(topic: impl Into<String>, turns: Vec<Message>) -> Self {
        Self {
            topic: topic.into(),
            turns,
        }
    }

    /// Number of turns, empty ones included.
    pub fn message_count(&self) -> usize {
        self.turns.len()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
