//! Fetcher trait definition.

use async_trait::async_trait;

use super::CancellationSignal;
use crate::errors::Result;

/// Retrieves the raw body of one HTTP resource.
///
/// Implementations must fail with [`FxRatesError::Api`] for a non-success
/// status and [`FxRatesError::Network`] for transport failures, timeouts
/// and cancellation. They must not retry.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use sdmx_fx_rates::transport::{CancellationSignal, Fetcher};
///
/// struct FixtureFetcher(String);
///
/// #[async_trait]
/// impl Fetcher for FixtureFetcher {
///     async fn get(&self, _url: &str, _signal: Option<&CancellationSignal>) -> Result<String> {
///         Ok(self.0.clone())
///     }
/// }
/// ```
///
/// [`FxRatesError::Api`]: crate::errors::FxRatesError::Api
/// [`FxRatesError::Network`]: crate::errors::FxRatesError::Network
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch `url` and return the body as text.
    ///
    /// When `signal` fires before the body arrives, the request is
    /// dropped and a cancellation error is returned.
    async fn get(&self, url: &str, signal: Option<&CancellationSignal>) -> Result<String>;
}
