//! Mock implementations of Fetcher for testing.

use crate::error::FetchError;
use crate::model::{Body, Fetcher};
use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::{self, StreamExt};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

type Respond = Box<dyn Fn(usize) -> Result<Vec<Result<Bytes, FetchError>>, FetchError> + Send + Sync>;

/// A mock fetcher that can be configured to succeed or fail.
///
/// The response closure receives the 1-based call number, which lets tests
/// hand out a different body on every fetch.
pub struct MockFetcher {
    respond: Respond,
    delay: Option<Duration>,
    call_count: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl MockFetcher {
    fn new(respond: Respond) -> Self {
        Self {
            respond,
            delay: None,
            call_count: AtomicUsize::new(0),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }

    /// Creates a mock fetcher that always returns `body`.
    pub fn with_body(body: impl Into<String>) -> Self {
        let body = body.into();
        Self::new(Box::new(move |_| Ok(vec![Ok(Bytes::from(body.clone()))])))
    }

    /// Creates a mock fetcher whose body depends on the call number.
    pub fn with_sequence<F>(create_body: F) -> Self
    where
        F: Fn(usize) -> String + Send + Sync + 'static,
    {
        Self::new(Box::new(move |call| {
            Ok(vec![Ok(Bytes::from(create_body(call)))])
        }))
    }

    /// Creates a mock fetcher whose whole outcome depends on the call number.
    pub fn with_outcomes<F>(outcome: F) -> Self
    where
        F: Fn(usize) -> Result<String, FetchError> + Send + Sync + 'static,
    {
        Self::new(Box::new(move |call| {
            outcome(call).map(|body| vec![Ok(Bytes::from(body))])
        }))
    }

    /// Creates a mock fetcher that fails as a non-2xx response would.
    pub fn with_status(status: u16) -> Self {
        Self::new(Box::new(move |_| Err(FetchError::Status { status })))
    }

    /// Creates a mock fetcher that fails as a timed out request would.
    pub fn timing_out(timeout: Duration) -> Self {
        Self::new(Box::new(move |_| Err(FetchError::Timeout(timeout))))
    }

    /// Creates a mock fetcher whose body breaks off after `prefix`.
    pub fn with_broken_body(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        Self::new(Box::new(move |_| {
            Ok(vec![
                Ok(Bytes::from(prefix.clone())),
                Err(FetchError::body("connection reset by peer")),
            ])
        }))
    }

    /// Delays every fetch by `delay` before answering.
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Gets the number of times fetch has been called.
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Highest number of fetches that were running at the same time.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Fetcher for MockFetcher {
    async fn fetch(&self) -> Result<Body, FetchError> {
        let call = self.call_count.fetch_add(1, Ordering::SeqCst) + 1;
        let running = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(running, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        let result = (self.respond)(call);

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        result.map(|chunks| stream::iter(chunks).boxed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::mocks::read_body;

    #[tokio::test]
    async fn test_mock_body_fetcher() {
        let fetcher = MockFetcher::with_body("hello");
        let body = fetcher.fetch().await.ok().unwrap();

        assert_eq!(read_body(body).await, b"hello");
        assert_eq!(fetcher.call_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_sequence_fetcher() {
        let fetcher = MockFetcher::with_sequence(|call| format!("call {}", call));

        let first = read_body(fetcher.fetch().await.ok().unwrap()).await;
        let second = read_body(fetcher.fetch().await.ok().unwrap()).await;

        assert_eq!(first, b"call 1");
        assert_eq!(second, b"call 2");
    }

    #[tokio::test]
    async fn test_mock_status_fetcher() {
        let fetcher = MockFetcher::with_status(401);
        let err = fetcher.fetch().await.err().unwrap();

        assert!(matches!(err, FetchError::Status { status: 401 }));
    }

    #[tokio::test]
    async fn test_mock_delayed_fetcher() {
        let fetcher = MockFetcher::with_body("{}").delayed(Duration::from_millis(10));

        let start = std::time::Instant::now();
        let _ = fetcher.fetch().await;

        assert!(start.elapsed() >= Duration::from_millis(10));
        assert_eq!(fetcher.max_in_flight(), 1);
    }
}
