//! Metric model for the Tautulli exporter.
//!
//! Defines the exported metric names, the owned gauge set and the seam
//! between the collector and whatever fetches the upstream document.

pub mod activity;
pub mod metrics;
pub mod traits;
pub mod types;

pub use activity::Activity;
pub use metrics::ExporterMetrics;
pub use traits::{Body, Fetcher};
pub use types::ActivityField;
