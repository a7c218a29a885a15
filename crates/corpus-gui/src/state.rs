use chrono::{DateTime, Utc};
use corpus_models::Dialogue;

// ── Global app state ──────────────────────────────────────────────────

/// Everything the window shows. Never mutated in place: each transition
/// consumes the current record and returns its successor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    /// Dialogues from the last successful fetch.
    pub dialogues: Vec<Dialogue>,
    /// A request is in flight; the generate button is disabled.
    pub loading: bool,
    /// User-facing message of the last failure, until dismissed or retried.
    pub error: Option<String>,
    /// When `dialogues` was received.
    pub fetched_at: Option<DateTime<Utc>>,
}

impl AppState {
    /// A request was just issued.
    #[must_use]
    pub fn begin_fetch(self) -> Self {
        Self {
            loading: true,
            error: None,
            ..self
        }
    }

    /// The request returned dialogues; they replace the previous batch.
    #[must_use]
    pub fn fetch_succeeded(self, dialogues: Vec<Dialogue>, at: DateTime<Utc>) -> Self {
        Self {
            dialogues,
            loading: false,
            error: None,
            fetched_at: Some(at),
        }
    }

    /// The request failed. Previously shown dialogues stay on screen.
    #[must_use]
    pub fn fetch_failed(self, message: String) -> Self {
        Self {
            loading: false,
            error: Some(message),
            ..self
        }
    }

    /// The user closed the error alert.
    #[must_use]
    pub fn dismiss_error(self) -> Self {
        Self { error: None, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use corpus_models::{Message, Speaker};

    fn batch(topic: &str) -> Vec<Dialogue> {
        vec![Dialogue::new(topic, vec![Message::new(Speaker::A, "مرحبا")])]
    }

    #[test]
    fn initial_state_is_idle_and_empty() {
        let state = AppState::default();
        assert!(!state.loading);
        assert!(state.error.is_none());
        assert!(state.dialogues.is_empty());
        assert!(state.fetched_at.is_none());
    }

    #[test]
    fn begin_fetch_sets_loading_and_clears_error() {
        let state = AppState::default()
            .fetch_failed("boom".into())
            .begin_fetch();
        assert!(state.loading);
        assert!(state.error.is_none());
    }

    #[test]
    fn success_replaces_batch_wholesale() {
        let now = Utc::now();
        let state = AppState::default()
            .fetch_succeeded(batch("first"), now)
            .begin_fetch()
            .fetch_succeeded(batch("second"), now);
        assert!(!state.loading);
        assert_eq!(state.dialogues, batch("second"));
        assert_eq!(state.fetched_at, Some(now));
    }

    #[test]
    fn failure_keeps_previous_batch() {
        let now = Utc::now();
        let state = AppState::default()
            .fetch_succeeded(batch("kept"), now)
            .begin_fetch()
            .fetch_failed("Cannot connect".into());
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("Cannot connect"));
        assert_eq!(state.dialogues, batch("kept"));
        assert_eq!(state.fetched_at, Some(now));
    }

    #[test]
    fn dismiss_only_touches_error() {
        let before = AppState::default()
            .fetch_succeeded(batch("x"), Utc::now())
            .fetch_failed("oops".into());
        let after = before.clone().dismiss_error();
        assert!(after.error.is_none());
        assert_eq!(after.dialogues, before.dialogues);
        assert_eq!(after.loading, before.loading);
    }
}
