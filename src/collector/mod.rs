//! Scrape orchestration.
//!
//! A [`Collector`] owns the exported metrics and refreshes them from the
//! upstream API once per call to [`Collector::collect`].

use futures::StreamExt;
use prometheus::core::Desc;
use prometheus::proto::MetricFamily;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::error::Result;
use crate::model::{Body, ExporterMetrics, Fetcher};
use crate::tautulli::parse_activity;

/// Serializes scrapes of one Tautulli instance and publishes their results.
///
/// The metric set lives behind an async mutex that is held for the whole
/// scrape, fetch included. Concurrent callers wait their turn and then run a
/// fresh scrape of their own; nothing is shared or cached between calls.
pub struct Collector {
    fetcher: Arc<dyn Fetcher>,
    metrics: Mutex<ExporterMetrics>,
    descs: Vec<Desc>,
}

impl Collector {
    /// Creates a collector with its own metric registry.
    pub fn new(fetcher: Arc<dyn Fetcher>) -> Result<Self> {
        let metrics = ExporterMetrics::new()?;
        let descs = metrics.descs();
        Ok(Self {
            fetcher,
            metrics: Mutex::new(metrics),
            descs,
        })
    }

    /// Descriptors of the nine metrics this collector emits.
    ///
    /// Fixed at construction; does not wait for a running scrape.
    pub fn describe(&self) -> &[Desc] {
        &self.descs
    }

    /// Runs one scrape and returns the resulting metric families.
    ///
    /// Never fails: a broken upstream shows up as `up == 0` with zeroed
    /// activity gauges.
    pub async fn collect(&self) -> Vec<MetricFamily> {
        let metrics = self.metrics.lock().await;

        metrics.reset_activity();
        metrics.total_scrapes.inc();
        self.scrape(&metrics).await;

        // Gathered under the lock so the caller sees one scrape's values.
        metrics.gather()
    }

    async fn scrape(&self, metrics: &ExporterMetrics) {
        let body = match self.fetcher.fetch().await {
            Ok(body) => body,
            Err(err) => {
                metrics.up.set(0.0);
                tracing::error!("Can't scrape Tautulli: {}", err);
                return;
            }
        };

        // Reaching Tautulli is what counts as up, whatever the payload holds.
        metrics.up.set(1.0);

        let bytes = read_to_end(body).await;
        let activity = parse_activity(&bytes);
        metrics.set_activity(&activity);

        tracing::debug!(
            streams = activity.stream_count,
            bandwidth = activity.total_bandwidth,
            "Scraped Tautulli activity"
        );
    }
}

/// Drains a body, keeping what arrived before any read error.
async fn read_to_end(mut body: Body) -> Vec<u8> {
    let mut buf = Vec::new();
    while let Some(chunk) = body.next().await {
        match chunk {
            Ok(bytes) => buf.extend_from_slice(&bytes),
            Err(err) => {
                tracing::warn!("Failed to read Tautulli response: {}", err);
                break;
            }
        }
    }
    buf
}
