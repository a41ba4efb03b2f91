//! Everything that happens to a query before it goes on the wire.
//!
//! - [`QueryValidator`]: syntax and consistency checks
//! - [`UrlBuilder`]: query -> request URL
//! - [`date_math`]: calendar helpers for lookback windows

pub mod date_math;
mod url_builder;
pub mod validator;

pub use url_builder::{UrlBuilder, DEFAULT_BASE_URL};
pub use validator::QueryValidator;
