//! Error types for the FX rates client.
//!
//! This module provides:
//! - [`FxRatesError`]: The main error enum for every public operation
//! - [`NetworkError`]: Why a request never produced a response
//! - [`ErrorKind`]: Flat discriminant for branching on the failure category

mod kind;

pub use kind::ErrorKind;

use std::time::Duration;

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FxRatesError>;

/// Errors that can occur while fetching and decoding reference rates.
///
/// None of these are retried internally. Each variant maps to an
/// [`ErrorKind`] via [`kind`](Self::kind).
#[derive(Error, Debug)]
pub enum FxRatesError {
    /// The query was rejected before any request was made.
    #[error("Validation error: {message}")]
    Validation {
        /// Which rule the query broke
        message: String,
    },

    /// The upstream API returned a non-success HTTP status.
    #[error("API error: {status} {status_text}")]
    Api {
        /// Numeric HTTP status code
        status: u16,
        /// Canonical reason phrase for the status
        status_text: String,
        /// Response body, when it could be read
        body: Option<String>,
    },

    /// The request failed before a response was received.
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    /// The body is not valid JSON or does not follow the SDMX structure.
    #[error("Parse error: {message}")]
    Parse {
        /// Human-readable reason
        message: String,
        /// Underlying JSON failure, for bodies that were not JSON at all
        #[source]
        source: Option<serde_json::Error>,
    },

    /// The response was well-formed but contained no usable rates.
    #[error(
        "No data for {} between {} and {}",
        .currencies.join(", "),
        .start_date,
        .end_date.as_deref().unwrap_or("today")
    )]
    NoData {
        /// Currencies the caller asked for
        currencies: Vec<String>,
        /// First day of the requested range
        start_date: String,
        /// Last day of the requested range, if one was given
        end_date: Option<String>,
    },
}

/// Reasons a request never produced an HTTP response.
#[derive(Error, Debug)]
pub enum NetworkError {
    /// The internal timer fired first.
    #[error("Request to {url} timed out after {}ms", .timeout.as_millis())]
    Timeout {
        /// Requested URL
        url: String,
        /// Configured timeout
        timeout: Duration,
    },

    /// The caller's cancellation signal fired first.
    #[error("Request to {url} was cancelled")]
    Cancelled {
        /// Requested URL
        url: String,
    },

    /// Connection, DNS, TLS or body-read failure.
    #[error("Request to {url} failed: {source}")]
    Transport {
        /// Requested URL
        url: String,
        /// Original cause
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl FxRatesError {
    /// Returns the category of this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use sdmx_fx_rates::errors::{ErrorKind, FxRatesError};
    ///
    /// let error = FxRatesError::validation("currencies must not be empty");
    /// assert_eq!(error.kind(), ErrorKind::Validation);
    /// ```
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation { .. } => ErrorKind::Validation,
            Self::Api { .. } => ErrorKind::Api,
            Self::Network(_) => ErrorKind::Network,
            Self::Parse { .. } => ErrorKind::Parse,
            Self::NoData { .. } => ErrorKind::NoData,
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            source: None,
        }
    }

    /// Wraps a JSON syntax failure.
    pub fn invalid_json(source: serde_json::Error) -> Self {
        Self::Parse {
            message: format!("Invalid JSON: {}", source),
            source: Some(source),
        }
    }

    pub fn no_data(
        currencies: &[String],
        start_date: impl Into<String>,
        end_date: Option<String>,
    ) -> Self {
        Self::NoData {
            currencies: currencies.to_vec(),
            start_date: start_date.into(),
            end_date,
        }
    }

    /// True for a timeout or cancellation, false for every other error.
    pub fn is_aborted(&self) -> bool {
        matches!(
            self,
            Self::Network(NetworkError::Timeout { .. } | NetworkError::Cancelled { .. })
        )
    }
}
