//! Error types for artscout.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level startup/shell failures (config, logging, terminal, HTTP setup)
//! - [`ValidationError`] - Query rejected before reaching the network
//! - [`TransportError`] - Catalog request failed (network, status, decode, auth)
//!
//! # Recovery Strategy
//!
//! Nothing in the search/detail core is fatal. Validation and transport
//! failures surface as UI state scoped to one session; a superseded
//! response is not an error at all and is dropped silently. Only
//! [`AppError`] terminates the process, and only during startup or when
//! the terminal itself breaks.

use thiserror::Error;

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Tracing subscriber could not be installed.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// The catalog client could not be constructed.
    #[error("Catalog setup error: {0}")]
    Catalog(String),

    /// Terminal or TUI rendering error.
    ///
    /// Without a working terminal the TUI cannot function; the shell
    /// restores the terminal and exits.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// A query that failed the validity predicate.
///
/// Raised before any request is issued. Distinct from a network error:
/// the search bar shows it as an error border, the results pane is untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The query was empty or whitespace-only.
    #[error("Query is required")]
    Empty,

    /// The trimmed query is shorter than the configured minimum.
    #[error("Query must be at least {min} characters (got {actual})")]
    TooShort {
        /// Minimum number of characters.
        min: usize,
        /// Characters in the trimmed query.
        actual: usize,
    },
}

/// A catalog request that did not produce a usable record.
///
/// The variants exist for logging. The core treats every variant the
/// same way: a Failure outcome for the session that issued the request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Connection, DNS, TLS or other network-level failure.
    #[error("network error: {0}")]
    Network(String),

    /// The endpoint answered with a non-success status.
    #[error("unexpected status {0}")]
    Status(u16),

    /// The body could not be decoded into the expected record.
    #[error("malformed response: {0}")]
    Decode(String),

    /// The application token could not be obtained.
    #[error("authentication failed: {0}")]
    Auth(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            TransportError::Status(status.as_u16())
        } else if err.is_decode() {
            TransportError::Decode(err.to_string())
        } else {
            TransportError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for TransportError {
    fn from(err: serde_json::Error) -> Self {
        TransportError::Decode(err.to_string())
    }
}
