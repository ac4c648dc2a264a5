//! Error types shared between the performer host, the client and the core.
//!
//! `PerformerError` covers the task failure taxonomy (invalid task, transport,
//! upstream status, decode, missing quote, encode) plus the I/O and framing
//! failures of the host and client binaries. Every task failure carries the
//! identifier it was raised for.
use std::error::Error as StdError;
use std::io;

use thiserror::Error;

use crate::currency::Currency;

/// Unified error type shared by the core, the performer host and the client.
#[derive(Error, Debug)]
pub enum PerformerError {
    /// Malformed task request (empty, absent or non-UTF-8 payload).
    #[error("Invalid task: {0}")]
    InvalidTask(String),

    /// Network-level failure calling the price service (timeout, connect, DNS, TLS).
    #[error("Transport error while fetching price for token {token_id}: {source}")]
    Transport {
        /// Identifier the upstream call was made for.
        token_id: String,
        /// Underlying transport error.
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    /// The price service answered with a non-success status code.
    #[error("Price service returned status {status} for token {token_id}: {body}")]
    UpstreamStatus {
        /// Identifier the upstream call was made for.
        token_id: String,
        /// HTTP status code.
        status: u16,
        /// Raw response body, kept for diagnostics.
        body: String,
    },

    /// The price service body is not the expected coin record.
    #[error("Failed to parse price service response for token {token_id}: {source}")]
    Decode {
        /// Identifier the upstream call was made for.
        token_id: String,
        /// JSON decoding error.
        #[source]
        source: serde_json::Error,
    },

    /// The coin record has no price for the quote currency.
    #[error("{currency} price not available for token {token_id}")]
    MissingQuote {
        /// Identifier the upstream call was made for.
        token_id: String,
        /// Currency that was looked up.
        currency: Currency,
    },

    /// Serializing a resolved quote failed.
    #[error("Failed to encode quote for token {token_id}: {source}")]
    Encode {
        /// Identifier of the quote being encoded.
        token_id: String,
        /// JSON encoding error.
        #[source]
        source: serde_json::Error,
    },

    /// Invalid configuration (e.g. an unusable price service URL).
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error originating from the standard library or sockets.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Framing or protocol error with a human-readable message.
    #[error("Format error: {0}")]
    Format(String),

    /// Failure while encoding/decoding wire messages via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Crossbeam/channel send failed (e.g., receiver dropped); contains a short context string.
    #[error("Channel send failed: {0}")]
    ChannelSend(String),
}

impl PerformerError {
    /// Builds a transport error for `token_id` from any underlying error.
    pub fn transport<E>(token_id: &str, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        PerformerError::Transport {
            token_id: token_id.to_string(),
            source: Box::new(source),
        }
    }

    /// Short name of the stage that failed, used in logs and wrapped messages.
    pub fn stage(&self) -> &'static str {
        match self {
            PerformerError::InvalidTask(_) => "validate",
            PerformerError::Transport { .. } => "transport",
            PerformerError::UpstreamStatus { .. } => "upstream-status",
            PerformerError::Decode { .. } => "decode",
            PerformerError::MissingQuote { .. } => "missing-quote",
            PerformerError::Encode { .. } => "encode",
            PerformerError::Config(_) => "config",
            PerformerError::Io(_)
            | PerformerError::Format(_)
            | PerformerError::Json(_)
            | PerformerError::ChannelSend(_) => "wire",
        }
    }
}
