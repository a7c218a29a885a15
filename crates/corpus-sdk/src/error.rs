//! SDK error types.
//!
//! [`SdkError`] is the single error type returned by every fallible
//! operation in the SDK. [`SdkError::kind`] folds its variants into the
//! four user-facing [`ErrorKind`]s.

use corpus_models::PayloadError;

/// Error type for all SDK operations.
#[derive(Debug, thiserror::Error)]
pub enum SdkError {
    /// Invalid configuration (e.g. an endpoint that is not a URL).
    #[error("configuration error: {0}")]
    Config(String),

    /// The endpoint could not be reached at all.
    #[error("cannot reach {endpoint}: {source}")]
    Unreachable {
        /// The URL the request was sent to.
        endpoint: String,
        /// Underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("server responded with {status}")]
    Status {
        /// The status code returned.
        status: reqwest::StatusCode,
    },

    /// Any other HTTP failure (e.g. the body could not be read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body was not a JSON document.
    #[error("invalid response envelope: {0}")]
    Envelope(#[from] serde_json::Error),

    /// The envelope had no usable `dialogues` field.
    #[error("invalid response envelope: missing `{field}` field")]
    MissingField {
        /// Name of the expected field.
        field: &'static str,
    },

    /// The `dialogues` payload could not be unwrapped.
    #[error(transparent)]
    Payload(#[from] PayloadError),
}

/// User-facing classification of an [`SdkError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum ErrorKind {
    /// Server unreachable or non-success status.
    Network,
    /// Envelope or payload could not be decoded.
    Parse,
    /// Decoded data does not have the expected shape.
    Validation,
    /// Anything else.
    Other,
}

impl SdkError {
    /// Classify this error for display.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Unreachable { .. } | Self::Status { .. } => ErrorKind::Network,
            Self::Http(e) if e.is_connect() || e.is_body() => ErrorKind::Network,
            Self::Envelope(_) => ErrorKind::Parse,
            Self::Payload(e) if e.is_syntax() => ErrorKind::Parse,
            Self::Payload(_) | Self::MissingField { .. } => ErrorKind::Validation,
            Self::Config(_) | Self::Http(_) => ErrorKind::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_errors_are_parse_kind() {
        let err: SdkError = serde_json::from_str::<serde_json::Value>("<html>")
            .unwrap_err()
            .into();
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert!(err.to_string().starts_with("invalid response envelope"));
    }

    #[test]
    fn payload_errors_split_by_syntax() {
        let malformed: SdkError = PayloadError::Malformed {
            reason: "EOF".into(),
        }
        .into();
        assert_eq!(malformed.kind(), ErrorKind::Parse);

        let shape: SdkError = PayloadError::NotAnArray {
            found: "object".into(),
        }
        .into();
        assert_eq!(shape.kind(), ErrorKind::Validation);
        assert_eq!(
            shape.to_string(),
            "invalid response format: expected an array of dialogues, found object"
        );
    }

    #[test]
    fn status_is_network_kind() {
        let err = SdkError::Status {
            status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
        };
        assert_eq!(err.kind(), ErrorKind::Network);
        assert_eq!(err.to_string(), "server responded with 503 Service Unavailable");
    }

    #[test]
    fn missing_field_is_validation_kind() {
        let err = SdkError::MissingField { field: "dialogues" };
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(ErrorKind::Validation.to_string(), "validation");
    }

    #[test]
    fn config_is_other_kind() {
        assert_eq!(SdkError::Config("bad".into()).kind(), ErrorKind::Other);
    }
}
