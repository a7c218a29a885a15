//! Error types for the `corpus-models` crate.
//!
//! Every failure of [`unwrap_payload`](crate::unwrap_payload) and
//! [`decode_dialogues`](crate::decode_dialogues) is a variant of
//! [`PayloadError`].

/// Errors produced while turning a raw payload into dialogues.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PayloadError {
    /// The cleaned-up payload text was not valid JSON.
    #[error("malformed payload: {reason}")]
    Malformed {
        /// Decoder message, including line and column.
        reason: String,
    },

    /// The payload decoded, but to something other than an array.
    #[error("invalid response format: expected an array of dialogues, found {found}")]
    NotAnArray {
        /// JSON type name of the decoded value.
        found: String,
    },

    /// An array element did not have the shape of a dialogue.
    #[error("invalid dialogue at index {index}: {reason}")]
    InvalidDialogue {
        /// Position of the offending element.
        index: usize,
        /// Human-readable explanation.
        reason: String,
    },
}

impl PayloadError {
    /// `true` when the payload could not be decoded at all, as opposed to
    /// decoding into the wrong shape.
    pub fn is_syntax(&self) -> bool {
        matches!(self, Self::Malformed { .. })
    }
}
