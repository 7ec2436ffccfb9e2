//! Client error types

use std::collections::BTreeMap;
use thiserror::Error;

/// Per-field validation messages, keyed by form field name
pub type FieldErrors = BTreeMap<&'static str, String>;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Request never got a response (connect, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with an error envelope
    #[error("API error {code} (HTTP {status}): {message}")]
    Api {
        status: u16,
        code: u16,
        message: String,
    },

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Checkout form rejected locally
    #[error("Validation failed: {}", summarize(.0))]
    Validation(FieldErrors),

    /// Nothing to order
    #[error("No items to order")]
    EmptyOrder,

    /// Could not build a URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Local persistence failed
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Transport failures and 5xx answers; the server never judged the request.
    ///
    /// An unreadable success body is not one of these: the order may exist.
    pub fn is_server_failure(&self) -> bool {
        match self {
            Self::Http(_) => true,
            Self::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Server error code, if the server answered with an envelope
    pub fn code(&self) -> Option<u16> {
        match self {
            Self::Api { code, .. } => Some(*code),
            _ => None,
        }
    }
}

fn summarize(errors: &FieldErrors) -> String {
    errors
        .iter()
        .map(|(field, message)| format!("{field}: {message}"))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
