use crate::error::FetchError;
use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::BoxStream;

/// Response body handed from a fetcher to its caller, chunk by chunk.
pub type Body = BoxStream<'static, Result<Bytes, FetchError>>;

/// Trait for types that can fetch the raw activity document.
///
/// Implementors make exactly one attempt per call. A returned body always
/// belongs to a 2xx response; every other outcome is an error.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetches the current activity document.
    ///
    /// # Returns
    /// - `Ok(Body)` for a 2xx response, to be read to the end by the caller
    /// - `Err(FetchError)` on network failure, timeout or non-2xx status
    async fn fetch(&self) -> Result<Body, FetchError>;
}
