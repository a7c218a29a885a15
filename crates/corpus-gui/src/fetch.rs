use chrono::Utc;
use corpus_models::Dialogue;
use corpus_sdk::{DialogueClient, ErrorKind, SdkError};
use dioxus::prelude::*;
use tracing::{error, info};

use crate::i18n::{self, Locale, T};
use crate::state::AppState;

/// Replace the signal's value with `transition(current)`.
pub fn apply(state: &mut Signal<AppState>, transition: impl FnOnce(AppState) -> AppState) {
    let current = state.read().clone();
    state.set(transition(current));
}

/// Handler of the generate button.
///
/// Not guarded against re-entry: the button is disabled while `loading`.
pub fn start(client: DialogueClient, mut app_state: Signal<AppState>, locale: Locale) {
    apply(&mut app_state, AppState::begin_fetch);
    info!(endpoint = %client.endpoint(), "requesting dialogues");

    spawn(async move {
        let outcome = client.fetch_dialogues().await;
        apply(&mut app_state, |state| settle(state, outcome, locale));
    });
}

/// Fold the result of one request into the state.
pub fn settle(
    state: AppState,
    outcome: Result<Vec<Dialogue>, SdkError>,
    locale: Locale,
) -> AppState {
    match outcome {
        Ok(dialogues) => {
            info!(count = dialogues.len(), "dialogues received");
            state.fetch_succeeded(dialogues, Utc::now())
        }
        Err(e) => {
            error!(kind = %e.kind(), error = %e, "failed to fetch dialogues");
            state.fetch_failed(describe(&e, &i18n::t(locale)))
        }
    }
}

/// The alert text for a failed request.
pub fn describe(err: &SdkError, tr: &T) -> String {
    match (err.kind(), err) {
        (ErrorKind::Network, SdkError::Status { status }) => format!("{} {status}", tr.err_status),
        (ErrorKind::Network, SdkError::Unreachable { endpoint, .. }) => {
            format!("{} ({endpoint})", tr.err_unreachable)
        }
        (ErrorKind::Network, _) => tr.err_unreachable.to_string(),
        (ErrorKind::Parse, _) => tr.err_invalid_data.to_string(),
        (ErrorKind::Validation, _) => format!("{} ({err})", tr.err_invalid_shape),
        (ErrorKind::Other, _) => tr.err_unexpected.to_string(),
    }
}
