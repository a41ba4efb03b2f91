//! SDMX FX Reference Rates Client
//!
//! Typed client for the euro foreign exchange reference rates published as
//! SDMX-JSON (`EXR` dataflow).
//!
//! # Overview
//!
//! The crate supports:
//! - Decoding SDMX-JSON data messages into flat rate observations
//! - Re-basing EUR-denominated rates onto any other base currency
//! - Date-keyed single- and multi-currency series
//! - Most-recent-rate lookup over a trailing window, and amount conversion
//! - Request timeouts and caller-driven cancellation
//!
//! # Architecture
//!
//! ```text
//! +------------------+
//! |    RateQuery     |  (currencies, dates, base, signal)
//! +------------------+
//!          |
//!          v
//! +------------------+     +------------------+
//! |  FxRatesClient   | --> |  QueryValidator  |
//! +------------------+     +------------------+
//!          |
//!          v
//! +------------------+     +------------------+
//! |    UrlBuilder    | --> |     Fetcher      |  (HttpFetcher, mocks)
//! +------------------+     +------------------+
//!                                   |
//!                                   v
//!                          +------------------+
//!                          |   sdmx::decode   |  (SDMX-JSON -> observations)
//!                          +------------------+
//!                                   |
//!                                   v
//!                          +------------------+
//!                          |  rates::adjust   |  (only for a non-EUR base)
//!                          +------------------+
//!                                   |
//!                                   v
//!                          +------------------+
//!                          |  rates::shaping  |  (series, latest rate, conversion)
//!                          +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`FxRatesClient`] - Query orchestrator
//! - [`RateQuery`] - Currencies, date range, base and cancellation signal
//! - [`RateObservation`] - One decoded rate
//! - [`CurrencyRates`] / [`MultiCurrencyRates`] - Date-keyed series
//! - [`RateResult`] / [`Conversion`] - Single-rate lookups
//! - [`FxRatesError`] - Every failure, classified by [`ErrorKind`]

pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod rates;
pub mod request;
pub mod sdmx;
pub mod transport;

pub use client::FxRatesClient;
pub use config::{ClientConfig, DEFAULT_LOOKBACK_DAYS};

// Re-export error types
pub use errors::{ErrorKind, FxRatesError, NetworkError, Result};

// Re-export all public types from models
pub use models::{
    Conversion, Currency, CurrencyRates, DateLabel, Frequency, MultiCurrencyRates,
    RateObservation, RateQuery, RateResult, NATIVE_CURRENCY,
};

pub use transport::{CancellationSignal, Fetcher, HttpFetcher};
