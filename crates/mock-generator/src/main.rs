//! Mock dialogue generator. Serves canned Arabic dialogues in the same
//! mangled envelope the real generator produces.

mod corpus;

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use clap::{Parser, ValueEnum};
use corpus_models::{encode_payload, Dialogue};
use rand::seq::SliceRandom;
use serde_json::{json, Value};
use tracing::info;

/// Mock dialogue generator.
#[derive(Parser, Debug)]
#[command(name = "mock-generator", about = "Serves canned dialogues on /generate-dialogues")]
struct Args {
    #[arg(long, default_value_t = 8000)]
    port: u16,

    /// Dialogues per response.
    #[arg(long, default_value_t = 3)]
    count: usize,

    /// How the `dialogues` field is encoded.
    #[arg(long, value_enum, default_value_t = TransportStyle::Fenced)]
    style: TransportStyle,
}

/// Encodings observed from the real generator.
#[derive(Clone, Copy, Debug, ValueEnum, PartialEq, Eq)]
enum TransportStyle {
    /// Quoted, fenced, escaped string.
    Fenced,
    /// Quoted and escaped string, no fence.
    Quoted,
    /// Plain JSON text in a string.
    Plain,
    /// A real JSON array.
    Array,
}

struct GeneratorState {
    style: TransportStyle,
    count: usize,
    corpus: Vec<Dialogue>,
}

#[derive(Debug, thiserror::Error)]
enum GeneratorError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl IntoResponse for GeneratorError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let state = Arc::new(GeneratorState {
        style: args.style,
        count: args.count,
        corpus: corpus::corpus(),
    });

    let addr = format!("0.0.0.0:{}", args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(address = %addr, style = ?args.style, count = args.count, "mock generator listening");

    axum::serve(listener, router(state)).await?;
    Ok(())
}

fn router(state: Arc<GeneratorState>) -> Router {
    Router::new()
        .route("/generate-dialogues", get(generate_dialogues))
        .with_state(state)
}

/// `GET /generate-dialogues`: a random selection from the corpus.
async fn generate_dialogues(
    State(state): State<Arc<GeneratorState>>,
) -> Result<Json<Value>, GeneratorError> {
    let batch = pick(&state.corpus, state.count);
    info!(count = batch.len(), style = ?state.style, "serving dialogues");
    Ok(Json(envelope(&batch, state.style)?))
}

fn pick(corpus: &[Dialogue], count: usize) -> Vec<Dialogue> {
    corpus
        .choose_multiple(&mut rand::thread_rng(), count)
        .cloned()
        .collect()
}

fn envelope(dialogues: &[Dialogue], style: TransportStyle) -> serde_json::Result<Value> {
    let field = match style {
        TransportStyle::Fenced => Value::String(encode_payload(dialogues)?),
        TransportStyle::Quoted => {
            let json = serde_json::to_string(dialogues)?;
            Value::String(format!("\"{}\"", json.replace('"', "\\\"")))
        }
        TransportStyle::Plain => Value::String(serde_json::to_string(dialogues)?),
        TransportStyle::Array => serde_json::to_value(dialogues)?,
    };
    Ok(json!({ "dialogues": field }))
}
