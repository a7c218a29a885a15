//! Unwrapping the generator's JSON-in-string payload.
//!
//! The upstream generator returns its dialogues as a *string* that holds JSON
//! text, usually mangled on the way out: wrapped in an extra pair of quotes,
//! fenced like a Markdown code block, with every quote and newline escaped.
//! [`unwrap_payload`] undoes that in a fixed order:
//!
//! 1. strip one pair of outer quotes;
//! 2. strip a leading fence (with optional language tag) and a closing fence;
//! 3. turn `\"` into `"` and delete `\n` escape sequences;
//! 4. decode JSON ([`PayloadError::Malformed`] on failure);
//! 5. require an array ([`PayloadError::NotAnArray`]);
//! 6. require every element to be a [`Dialogue`]
//!    ([`PayloadError::InvalidDialogue`]).
//!
//! [`encode_payload`] produces the same mangled form from a list of
//! dialogues, which is what the development server emits.

use serde_json::Value;

use crate::dialogue::Dialogue;
use crate::error::PayloadError;

const FENCE: &str = "```";
const ESCAPED_QUOTE: &str = "\\\"";
const ESCAPED_NEWLINE: &str = "\\n";

/// Turn a raw `dialogues` field into validated dialogues.
///
/// # Examples
///
/// ```
/// use corpus_models::unwrap_payload;
///
/// let raw = r#""```json\n[{\"topic\":\"Greetings\",\"dialogue\":[{\"A\":\"Hello\"}]}]\n```""#;
/// let dialogues = unwrap_payload(raw).unwrap();
/// assert_eq!(dialogues[0].topic, "Greetings");
/// ```
pub fn unwrap_payload(raw: &str) -> Result<Vec<Dialogue>, PayloadError> {
    let text = strip_outer_quotes(raw.trim());
    let text = strip_fences(text);
    let text = unescape(text);

    let value: Value = serde_json::from_str(&text).map_err(|e| PayloadError::Malformed {
        reason: e.to_string(),
    })?;

    decode_dialogues(value)
}

/// Validate an already-decoded JSON value as a list of dialogues.
///
/// This is steps 5 and 6 of [`unwrap_payload`], used directly when a server
/// sends the field as a real JSON array.
pub fn decode_dialogues(value: Value) -> Result<Vec<Dialogue>, PayloadError> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                serde_json::from_value::<Dialogue>(item).map_err(|e| {
                    PayloadError::InvalidDialogue {
                        index,
                        reason: e.to_string(),
                    }
                })
            })
            .collect(),
        other => Err(PayloadError::NotAnArray {
            found: json_type_name(&other).to_string(),
        }),
    }
}

/// Encode dialogues into the generator's transport form.
///
/// The result is compact JSON inside a ```` ```json ```` fence, with escaped
/// newlines and quotes, wrapped in one pair of outer quotes.
///
/// # Errors
///
/// Returns the underlying `serde_json` error if serialization fails.
pub fn encode_payload(dialogues: &[Dialogue]) -> serde_json::Result<String> {
    let json = serde_json::to_string(dialogues)?;
    let fenced = format!("{FENCE}json{ESCAPED_NEWLINE}{json}{ESCAPED_NEWLINE}{FENCE}");
    Ok(format!("\"{}\"", fenced.replace('"', ESCAPED_QUOTE)))
}

// ---------------------------------------------------------------------------
// Cleanup steps
// ---------------------------------------------------------------------------

fn strip_outer_quotes(text: &str) -> &str {
    if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
        &text[1..text.len() - 1]
    } else {
        text
    }
}

fn strip_fences(text: &str) -> &str {
    let mut text = text.trim();
    if let Some(rest) = text.strip_prefix(FENCE) {
        // Language tag, e.g. "json".
        let rest = rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric());
        text = strip_leading_newline(rest);
    }
    if let Some(rest) = text.strip_suffix(FENCE) {
        text = strip_trailing_newline(rest);
    }
    text.trim()
}

fn strip_leading_newline(text: &str) -> &str {
    text.strip_prefix(ESCAPED_NEWLINE)
        .or_else(|| text.strip_prefix("\r\n"))
        .or_else(|| text.strip_prefix('\n'))
        .unwrap_or(text)
}

fn strip_trailing_newline(text: &str) -> &str {
    text.strip_suffix(ESCAPED_NEWLINE)
        .or_else(|| text.strip_suffix("\r\n"))
        .or_else(|| text.strip_suffix('\n'))
        .unwrap_or(text)
}

fn unescape(text: &str) -> String {
    text.replace(ESCAPED_QUOTE, "\"").replace(ESCAPED_NEWLINE, "")
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialogue::{Message, Speaker};

    const GREETINGS: &str = r#"[{"topic":"Greetings","dialogue":[{"A":"Hello"},{"B":"Hi there"}]}]"#;

    fn greetings() -> Vec<Dialogue> {
        vec![Dialogue::new(
            "Greetings",
            vec![
                Message::new(Speaker::A, "Hello"),
                Message::new(Speaker::B, "Hi there"),
            ],
        )]
    }

    fn sample_corpus() -> Vec<Dialogue> {
        vec![
            Dialogue::new(
                "في السوق",
                vec![
                    Message::new(Speaker::A, "بكم هذا التفاح؟"),
                    Message::new(Speaker::B, "عشرة دراهم للكيلو."),
                    Message::default(),
                    Message::new(Speaker::A, "سآخذ كيلوين من فضلك."),
                ],
            ),
            Dialogue::new("Empty", Vec::new()),
        ]
    }

    #[test]
    fn plain_json_parses() {
        assert_eq!(unwrap_payload(GREETINGS).unwrap(), greetings());
    }

    #[test]
    fn escaped_envelope_string_unwraps() {
        let raw = r#""[{\"topic\":\"Greetings\",\"dialogue\":[{\"A\":\"Hello\"},{\"B\":\"Hi there\"}]}]""#;
        let dialogues = unwrap_payload(raw).unwrap();
        assert_eq!(dialogues.len(), 1);
        assert_eq!(dialogues[0].topic, "Greetings");
        assert_eq!(dialogues[0].message_count(), 2);
        assert_eq!(dialogues, greetings());
    }

    #[test]
    fn outer_quotes_do_not_change_result() {
        let quoted = format!("\"{GREETINGS}\"");
        assert_eq!(unwrap_payload(&quoted).unwrap(), unwrap_payload(GREETINGS).unwrap());
    }

    #[test]
    fn only_one_pair_of_quotes_is_stripped() {
        let doubled = format!("\"\"{GREETINGS}\"\"");
        let err = unwrap_payload(&doubled).unwrap_err();
        assert!(err.is_syntax() || matches!(err, PayloadError::NotAnArray { .. }));
    }

    #[test]
    fn escaped_fence_is_removed() {
        let raw = format!("```json\\n{GREETINGS}\\n```");
        let dialogues = unwrap_payload(&raw).unwrap();
        assert_eq!(dialogues, greetings());
        assert!(!dialogues[0].topic.contains('`'));
    }

    #[test]
    fn real_newline_fence_without_tag_is_removed() {
        let raw = format!("```\n{GREETINGS}\n```\n");
        assert_eq!(unwrap_payload(&raw).unwrap(), greetings());
    }

    #[test]
    fn closing_fence_alone_is_removed() {
        let raw = format!("{GREETINGS}\\n```");
        assert_eq!(unwrap_payload(&raw).unwrap(), greetings());
    }

    #[test]
    fn escaped_newlines_are_collapsed() {
        let raw = "[\\n{\\\"topic\\\":\\\"T\\\",\\n\\\"dialogue\\\":[]}\\n]";
        let dialogues = unwrap_payload(raw).unwrap();
        assert_eq!(dialogues, vec![Dialogue::new("T", Vec::new())]);
    }

    #[test]
    fn encode_then_unwrap_round_trips() {
        let corpus = sample_corpus();
        let encoded = encode_payload(&corpus).unwrap();
        assert!(encoded.starts_with("\"```json\\n"));
        assert!(encoded.ends_with("\\n```\""));
        assert_eq!(unwrap_payload(&encoded).unwrap(), corpus);
    }

    #[test]
    fn empty_turn_survives_round_trip() {
        let encoded = encode_payload(&sample_corpus()).unwrap();
        let back = unwrap_payload(&encoded).unwrap();
        assert!(back[0].turns[2].is_empty());
        assert_eq!(back[0].message_count(), 4);
    }

    #[test]
    fn truncated_json_is_malformed() {
        let err = unwrap_payload(&GREETINGS[..GREETINGS.len() - 3]).unwrap_err();
        assert!(matches!(err, PayloadError::Malformed { .. }));
    }

    #[test]
    fn empty_input_is_malformed() {
        assert!(unwrap_payload("").unwrap_err().is_syntax());
        assert!(unwrap_payload("\"").unwrap_err().is_syntax());
        assert!(unwrap_payload("\"\"").unwrap_err().is_syntax());
    }

    #[test]
    fn object_is_not_an_array() {
        let err = unwrap_payload(r#"{"topic":"Greetings","dialogue":[]}"#).unwrap_err();
        assert_eq!(
            err,
            PayloadError::NotAnArray {
                found: "object".into()
            }
        );
    }

    #[test]
    fn scalars_are_not_arrays() {
        for (raw, found) in [("42", "number"), ("null", "null"), ("true", "boolean")] {
            let err = unwrap_payload(raw).unwrap_err();
            assert_eq!(err, PayloadError::NotAnArray { found: found.into() });
        }
    }

    #[test]
    fn element_without_topic_is_rejected() {
        let err = unwrap_payload(r#"[{"topic":"ok","dialogue":[]},{"dialogue":[]}]"#).unwrap_err();
        match err {
            PayloadError::InvalidDialogue { index, reason } => {
                assert_eq!(index, 1);
                assert!(reason.contains("topic"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_string_side_is_rejected() {
        let err = unwrap_payload(r#"[{"topic":"t","dialogue":[{"A":7}]}]"#).unwrap_err();
        assert!(matches!(err, PayloadError::InvalidDialogue { index: 0, .. }));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let raw = r#"[{"topic":"t","level":"A1","dialogue":[{"A":"x","note":"n"}]}]"#;
        let dialogues = unwrap_payload(raw).unwrap();
        assert_eq!(dialogues[0].turns, vec![Message::new(Speaker::A, "x")]);
    }

    #[test]
    fn decode_dialogues_accepts_array_value() {
        let value: Value = serde_json::from_str(GREETINGS).unwrap();
        assert_eq!(decode_dialogues(value).unwrap(), greetings());
    }

    #[test]
    fn decode_dialogues_rejects_string_value() {
        let err = decode_dialogues(Value::String(GREETINGS.into())).unwrap_err();
        assert_eq!(err, PayloadError::NotAnArray { found: "string".into() });
    }
}
