use alloc::string::String;

use thiserror::Error;

use crate::PageRequest;

/// A failed page fetch.
///
/// This is the only error the feed recognizes. It never aborts the feed: the controller
/// records it as a diagnostic and returns to idle.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TransportError {
    /// The endpoint answered with a non-success status code.
    #[error("HTTP status {status}")]
    Status { status: u16 },

    /// The request never produced a response (DNS, connect, timeout, ...).
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// The response body could not be read as a page of items.
    #[error("invalid response body: {message}")]
    Body { message: String },
}

impl TransportError {
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    pub fn body(message: impl Into<String>) -> Self {
        Self::Body {
            message: message.into(),
        }
    }
}

/// A non-fatal event reported through `FeedOptions::on_diagnostic`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Diagnostic {
    /// The live fetch failed; feed state was left untouched.
    FetchFailed {
        request: PageRequest,
        error: TransportError,
    },
    /// A result arrived for a request that is no longer live and was discarded.
    StaleResult { request: PageRequest },
}
