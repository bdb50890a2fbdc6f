use crate::error::FetchError;
use crate::model::{Body, Fetcher};
use async_trait::async_trait;
use futures::{StreamExt, TryStreamExt};
use reqwest::{Client as HttpClient, Url};
use std::time::Duration;

const USER_AGENT: &str = concat!("tautulli-prometheus-exporter/", env!("CARGO_PKG_VERSION"));

/// Fetches the activity document from Tautulli over HTTP.
pub struct Client {
    http_client: HttpClient,
    url: Url,
    timeout: Duration,
}

impl Client {
    /// Creates a client for `url`.
    ///
    /// `url` must already carry the `apikey` and `cmd` query parameters.
    /// With `ssl_verify` off, invalid or self-signed certificates are accepted.
    pub fn new(url: Url, ssl_verify: bool, timeout: Duration) -> Result<Self, FetchError> {
        let http_client = HttpClient::builder()
            .timeout(timeout)
            .danger_accept_invalid_certs(!ssl_verify)
            .user_agent(USER_AGENT)
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self {
            http_client,
            url,
            timeout,
        })
    }
}

#[async_trait]
impl Fetcher for Client {
    async fn fetch(&self) -> Result<Body, FetchError> {
        let response = self
            .http_client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| FetchError::from_request(e, self.timeout))?;

        let status = response.status();
        if !status.is_success() {
            // Dropping the response closes it without reading the body.
            return Err(FetchError::status(status));
        }

        let timeout = self.timeout;
        Ok(response
            .bytes_stream()
            .map_err(move |e| {
                if e.is_timeout() {
                    FetchError::Timeout(timeout)
                } else {
                    FetchError::body(e)
                }
            })
            .boxed())
    }
}
