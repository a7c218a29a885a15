//! Client configuration.
//!
//! The only setting is the generator endpoint. The application always uses
//! the fixed local development server; tests point the client elsewhere.

/// Fixed local generator endpoint.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/generate-dialogues";

/// Settings for a [`DialogueClient`](crate::DialogueClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Full URL of the generator endpoint.
    pub endpoint: String,
}

impl ClientConfig {
    /// Configuration pointing at an explicit endpoint.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }
}
