//! HTTP surface: `/metrics` for Prometheus and a small index page.

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use prometheus::proto::MetricFamily;
use prometheus::{Encoder, TextEncoder};
use std::sync::Arc;

use crate::collector::Collector;

pub const METRICS_PATH: &str = "/metrics";

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Builds the router serving `collector`.
pub fn router(collector: Arc<Collector>) -> Router {
    Router::new()
        .route(METRICS_PATH, get(metrics))
        .route("/", get(index))
        .with_state(collector)
}

async fn metrics(State(collector): State<Arc<Collector>>) -> Response {
    let families = collector.collect().await;
    match encode(&families) {
        Ok(body) => ([(header::CONTENT_TYPE, prometheus::TEXT_FORMAT)], body).into_response(),
        Err(err) => {
            tracing::error!("Failed to encode metrics: {}", err);
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
        }
    }
}

async fn index() -> Html<String> {
    Html(format!(
        r#"<html>
<head><title>Tautulli Exporter</title></head>
<body>
<h1>Tautulli Exporter</h1>
<p><a href="{}">Metrics</a></p>
<p>Version: {}</p>
</body>
</html>"#,
        METRICS_PATH, VERSION
    ))
}

/// Encodes metric families in the Prometheus text format.
pub fn encode(families: &[MetricFamily]) -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let mut buffer = Vec::new();
    encoder.encode(families, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
}
