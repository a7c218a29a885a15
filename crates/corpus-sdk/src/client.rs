//! HTTP client for the dialogue generator.
//!
//! [`DialogueClient`] sends one `GET` per call, with default headers, no
//! body, no timeout and no retries, then unwraps the `dialogues` field of
//! the JSON envelope.
//!
//! # Typical usage
//!
//! ```rust,no_run
//! use corpus_sdk::{ClientConfig, DialogueClient};
//!
//! # async fn run() -> Result<(), corpus_sdk::SdkError> {
//! let client = DialogueClient::new(&ClientConfig::default())?;
//! for dialogue in client.fetch_dialogues().await? {
//!     println!("{} ({} turns)", dialogue.topic, dialogue.message_count());
//! }
//! # Ok(())
//! # }
//! ```

use corpus_models::{decode_dialogues, unwrap_payload, Dialogue};
use reqwest::Url;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::SdkError;

/// Envelope field carrying the payload.
pub const DIALOGUES_FIELD: &str = "dialogues";

/// Client bound to one generator endpoint.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct DialogueClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl DialogueClient {
    /// Create a client for the configured endpoint.
    pub fn new(config: &ClientConfig) -> Result<Self, SdkError> {
        let endpoint = Url::parse(&config.endpoint).map_err(|e| {
            SdkError::Config(format!("invalid endpoint {:?}: {e}", config.endpoint))
        })?;
        Ok(Self {
            http: reqwest::Client::new(),
            endpoint,
        })
    }

    /// Create a client for [`DEFAULT_ENDPOINT`](crate::config::DEFAULT_ENDPOINT).
    pub fn local() -> Result<Self, SdkError> {
        Self::new(&ClientConfig::default())
    }

    /// The endpoint this client requests.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Request a batch and return the raw JSON envelope.
    pub async fn fetch_envelope(&self) -> Result<Value, SdkError> {
        let res = self
            .http
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    SdkError::Unreachable {
                        endpoint: self.endpoint.to_string(),
                        source: e,
                    }
                } else {
                    SdkError::Http(e)
                }
            })?;

        let status = res.status();
        if !status.is_success() {
            return Err(SdkError::Status { status });
        }

        let text = res.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Request a batch and unwrap it into dialogues.
    pub async fn fetch_dialogues(&self) -> Result<Vec<Dialogue>, SdkError> {
        let envelope = self.fetch_envelope().await?;
        dialogues_from_envelope(envelope)
    }
}

/// Extract and unwrap the `dialogues` field of a response envelope.
///
/// A string field goes through [`unwrap_payload`]; an array field is
/// validated as-is. Anything else is a [`SdkError::MissingField`].
pub fn dialogues_from_envelope(envelope: Value) -> Result<Vec<Dialogue>, SdkError> {
    let field = match envelope {
        Value::Object(mut map) => map.remove(DIALOGUES_FIELD),
        _ => None,
    };

    match field {
        Some(Value::String(raw)) => Ok(unwrap_payload(&raw)?),
        Some(value @ Value::Array(_)) => Ok(decode_dialogues(value)?),
        _ => Err(SdkError::MissingField {
            field: DIALOGUES_FIELD,
        }),
    }
}
