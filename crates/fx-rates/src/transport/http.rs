//! `reqwest`-backed [`Fetcher`].
//!
//! The request is raced against the configured timeout and the caller's
//! cancellation signal. Whichever finishes first wins; the losers are
//! dropped, which aborts the in-flight request.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client};
use tracing::{debug, warn};

use super::{CancellationSignal, Fetcher};
use crate::errors::{FxRatesError, NetworkError, Result};

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const ACCEPT_SDMX_JSON: &str = "application/vnd.sdmx.data+json;version=1.0.0-wd, application/json";

/// HTTP fetcher for the statistical data API.
pub struct HttpFetcher {
    client: Client,
    timeout: Duration,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Self {
        Self::with_user_agent(timeout, concat!("sdmx-fx-rates/", env!("CARGO_PKG_VERSION")))
    }

    pub fn with_user_agent(timeout: Duration, user_agent: &str) -> Self {
        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, timeout }
    }

    async fn send(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, ACCEPT_SDMX_JSON)
            .send()
            .await
            .map_err(|e| transport_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.ok().filter(|b| !b.is_empty());
            warn!("FX rates API returned HTTP {} for {}", status, url);
            return Err(FxRatesError::Api {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
                body,
            });
        }

        response.text().await.map_err(|e| transport_error(url, e))
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn get(&self, url: &str, signal: Option<&CancellationSignal>) -> Result<String> {
        debug!("FX rates request: {}", url);
        let body = race(url, self.timeout, signal, self.send(url)).await?;
        debug!("FX rates response: {} bytes", body.len());
        Ok(body)
    }
}

/// Runs `request` until it completes, `timeout` elapses, or `signal` fires.
pub(crate) async fn race<F>(
    url: &str,
    timeout: Duration,
    signal: Option<&CancellationSignal>,
    request: F,
) -> Result<String>
where
    F: Future<Output = Result<String>>,
{
    if signal.is_some_and(CancellationSignal::is_cancelled) {
        return Err(cancelled(url));
    }

    let cancellation = async {
        match signal {
            Some(signal) => signal.cancelled().await,
            None => std::future::pending::<()>().await,
        }
    };

    tokio::select! {
        result = request => result,
        _ = tokio::time::sleep(timeout) => {
            warn!("FX rates request timed out after {:?}: {}", timeout, url);
            Err(NetworkError::Timeout { url: url.to_string(), timeout }.into())
        }
        _ = cancellation => Err(cancelled(url)),
    }
}

fn cancelled(url: &str) -> FxRatesError {
    NetworkError::Cancelled {
        url: url.to_string(),
    }
    .into()
}

fn transport_error(url: &str, error: reqwest::Error) -> FxRatesError {
    NetworkError::Transport {
        url: url.to_string(),
        source: Box::new(error),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    const URL: &str = "https://example.test/data/EXR/D.USD.EUR.SP00.A";

    #[tokio::test]
    async fn test_request_wins() {
        let body = race(URL, DEFAULT_TIMEOUT, None, async { Ok("{}".to_string()) })
            .await
            .unwrap();
        assert_eq!(body, "{}");
    }

    #[tokio::test]
    async fn test_request_error_passes_through() {
        let result = race(URL, DEFAULT_TIMEOUT, None, async {
            Err(FxRatesError::Api {
                status: 503,
                status_text: "Service Unavailable".to_string(),
                body: None,
            })
        })
        .await;
        assert_eq!(result.unwrap_err().kind(), ErrorKind::Api);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_wins() {
        let error = race(
            URL,
            Duration::from_secs(30),
            None,
            std::future::pending::<Result<String>>(),
        )
        .await
        .unwrap_err();

        assert!(matches!(
            error,
            FxRatesError::Network(NetworkError::Timeout { timeout, .. }) if timeout == Duration::from_secs(30)
        ));
        let message = error.to_string();
        assert!(message.contains("30000ms"));
        assert!(message.contains(URL));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancellation_wins() {
        let signal = CancellationSignal::new();
        let trigger = signal.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(1)).await;
            trigger.cancel();
        });

        let error = race(
            URL,
            Duration::from_secs(30),
            Some(&signal),
            std::future::pending::<Result<String>>(),
        )
        .await
        .unwrap_err();

        assert!(matches!(
            error,
            FxRatesError::Network(NetworkError::Cancelled { .. })
        ));
        assert!(error.is_aborted());
    }

    #[tokio::test]
    async fn test_already_cancelled_skips_request() {
        let signal = CancellationSignal::new();
        signal.cancel();

        let error = tokio::time::timeout(
            Duration::from_millis(100),
            race(
                URL,
                DEFAULT_TIMEOUT,
                Some(&signal),
                std::future::pending::<Result<String>>(),
            ),
        )
        .await
        .unwrap()
        .unwrap_err();

        assert!(matches!(
            error,
            FxRatesError::Network(NetworkError::Cancelled { .. })
        ));
    }

    #[test]
    fn test_default_timeout() {
        assert_eq!(HttpFetcher::default().timeout, Duration::from_secs(30));
    }

    /// Serves one canned HTTP response on a loopback port.
    async fn serve_once(response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 4096];
            let _ = socket.read(&mut request).await;
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });
        format!("http://{}/data/EXR/D.USD.EUR.SP00.A", addr)
    }

    #[tokio::test]
    async fn test_success_returns_body() {
        let url = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 2\r\nConnection: close\r\n\r\n{}",
        )
        .await;

        let body = HttpFetcher::default().get(&url, None).await.unwrap();
        assert_eq!(body, "{}");
    }

    #[tokio::test]
    async fn test_error_status_maps_to_api_error() {
        let url = serve_once(
            "HTTP/1.1 404 Not Found\r\nContent-Type: text/plain\r\nContent-Length: 17\r\nConnection: close\r\n\r\nNo results found.",
        )
        .await;

        let error = HttpFetcher::default().get(&url, None).await.unwrap_err();

        match error {
            FxRatesError::Api {
                status,
                status_text,
                body,
            } => {
                assert_eq!(status, 404);
                assert_eq!(status_text, "Not Found");
                assert_eq!(body.as_deref(), Some("No results found."));
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_connection_refused_maps_to_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let url = format!("http://{}/data/EXR/D.USD.EUR.SP00.A", addr);

        let error = HttpFetcher::default().get(&url, None).await.unwrap_err();

        assert_eq!(error.kind(), ErrorKind::Network);
        assert!(!error.is_aborted());
        match error {
            FxRatesError::Network(NetworkError::Transport { url: failed, .. }) => {
                assert_eq!(failed, url)
            }
            other => panic!("expected Transport error, got {:?}", other),
        }
    }
}
