//! HTTP transport: the [`Fetcher`] seam, its `reqwest` implementation and
//! the cancellation handle callers pass through queries.

mod cancel;
mod http;
mod traits;

pub use cancel::CancellationSignal;
pub use http::{HttpFetcher, DEFAULT_TIMEOUT};
pub use traits::Fetcher;
