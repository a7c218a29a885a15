mod state;
mod fetch;
mod view;
mod components;
mod i18n;

use corpus_sdk::DialogueClient;
use dioxus::prelude::*;
use state::AppState;
use components::header::Header;
use components::error_alert::ErrorAlert;
use components::generate_panel::GeneratePanel;
use components::dialogue_card::DialogueList;

fn main() -> anyhow::Result<()> {
    // Initialise structured logging (controlled via RUST_LOG env var).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let client = DialogueClient::local()?;
    tracing::info!(endpoint = %client.endpoint(), "dialogue endpoint configured");

    dioxus::LaunchBuilder::new().with_context(client).launch(App);
    Ok(())
}

#[component]
fn App() -> Element {
    let client = use_context::<DialogueClient>();
    let mut app_state = use_signal(AppState::default);
    let mut locale_signal = use_signal(|| i18n::Locale::En);
    use_context_provider(|| locale_signal);

    let state = app_state.read().clone();
    let locale = *locale_signal.read();

    rsx! {
        style { {include_str!("style.css")} }
        div { class: "app-root", dir: locale.dir(),
            Header {
                on_toggle_locale: move |_| {
                    let next = locale_signal.read().next();
                    locale_signal.set(next);
                },
            }

            if let Some(message) = state.error.clone() {
                ErrorAlert {
                    message: message,
                    on_dismiss: move |_| {
                        fetch::apply(&mut app_state, AppState::dismiss_error);
                    },
                }
            }

            GeneratePanel {
                loading: state.loading,
                on_generate: move |_| {
                    let locale = *locale_signal.read();
                    fetch::start(client.clone(), app_state, locale);
                },
            }

            // fetched_at is set together with every non-empty batch
            if let (false, Some(fetched_at)) = (state.dialogues.is_empty(), state.fetched_at) {
                DialogueList {
                    dialogues: state.dialogues.clone(),
                    fetched_at: fetched_at,
                }
            }
        }
    }
}
