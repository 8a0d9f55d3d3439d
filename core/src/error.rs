//! Error types for the hotel API client.
//!
//! # Design
//! Every failed call lands in exactly one of three variants: the server
//! answered with a non-2xx status, the server could not be reached, or the
//! request never left the process. The `Display` output is the text shown
//! to the user, so the variants format themselves accordingly.

use thiserror::Error;

/// Errors returned by gateway operations and `HotelClient` parse methods.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("Error {status}: {}", render_body(.body))]
    ServerError { status: u16, body: String },

    /// The request was sent but no response arrived.
    #[error("Could not reach the server. Make sure the REST server is running.")]
    Unreachable,

    /// The request could not be built or sent, or its response not decoded.
    #[error("Error: {0}")]
    LocalFailure(String),
}

impl ApiError {
    pub fn local(msg: impl Into<String>) -> Self {
        ApiError::LocalFailure(msg.into())
    }

    /// Status code of a server-reported error.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::ServerError { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// JSON bodies are pretty-printed; anything else is shown as a quoted string.
fn render_body(body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => serde_json::to_string_pretty(&value).unwrap_or_else(|_| body.to_string()),
        Err(_) => serde_json::Value::String(body.to_string()).to_string(),
    }
}
