//! # Corpus SDK
//!
//! Client for the dialogue generator's HTTP endpoint.
//!
//! The SDK provides:
//!
//! * [`DialogueClient`]: issues the `GET` and unwraps the response
//!   envelope into [`Dialogue`] records.
//! * [`ClientConfig`]: endpoint configuration, read from the environment.
//! * [`SdkError`]: unified error type, classified by [`ErrorKind`].
//!
//! # Quick start
//!
//! ```rust,no_run
//! use corpus_sdk::DialogueClient;
//!
//! # async fn run() -> Result<(), corpus_sdk::SdkError> {
//! let client = DialogueClient::local()?;
//! let dialogues = client.fetch_dialogues().await?;
//! println!("{} dialogue(s)", dialogues.len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;

pub use client::{dialogues_from_envelope, DialogueClient, DIALOGUES_FIELD};
pub use config::ClientConfig;
pub use error::{ErrorKind, SdkError};

// Re-export the data types so callers need only one dependency.
pub use corpus_models::{Dialogue, Message, PayloadError, Speaker};
pub use reqwest::StatusCode;
