//! Tautulli Prometheus Exporter
//!
//! Republishes the current stream and bandwidth activity reported by a
//! Tautulli server as Prometheus metrics.
//!
//! # Architecture
//!
//! There is no background polling. Every request to `/metrics` triggers one
//! scrape of Tautulli's `get_activity` API; concurrent requests are
//! serialized by the collector.
//!
//! # Features
//!
//! - Per-scrape timeout towards Tautulli
//! - Optional TLS certificate verification
//! - `up` metric reporting whether the last scrape reached Tautulli
//! - Graceful shutdown on SIGTERM/SIGINT

mod collector;
mod config;
mod error;
mod model;
mod server;
mod tautulli;


use crate::collector::Collector;
use crate::config::{ServerConfig, TautulliConfig};
use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal::ctrl_c;
use tokio::signal::unix::{signal, SignalKind};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application entry point.
///
/// Initializes logging, then runs the exporter until a shutdown signal
/// arrives. Any startup failure is logged and ends the process with status 1.
#[tokio::main]
async fn main() {
    let app_config = match config::load_app_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(1);
        }
    };
    tracing_subscriber::fmt()
        .with_max_level(app_config.log_level())
        .init();

    if let Err(err) = run().await {
        tracing::error!("{:#}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    tracing::info!("Tautulli exporter version: {}", VERSION);

    let tautulli_config = config::load_tautulli_config()?;
    let server_config = config::load_server_config()?;
    log_startup(&tautulli_config, &server_config);

    let collector = build_collector(&tautulli_config)?;
    let app = server::router(collector);

    let addr = SocketAddr::from(([0, 0, 0, 0], server_config.serve_port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Serving {} on port {}", server::METRICS_PATH, server_config.serve_port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    tracing::info!("Exporter stopped.");
    Ok(())
}

/// Wires the HTTP fetcher for the activity endpoint into a collector.
fn build_collector(config: &TautulliConfig) -> Result<Arc<Collector>> {
    let url = config.activity_url()?;
    let client = tautulli::Client::new(url, config.ssl_verify, config.timeout)?;
    let collector = Collector::new(Arc::new(client))?;
    Ok(Arc::new(collector))
}

fn log_startup(tautulli_config: &TautulliConfig, server_config: &ServerConfig) {
    tracing::info!("Tautulli Scrape URI: {}", tautulli_config.uri);
    tracing::info!("Tautulli SSL verify: {}", tautulli_config.ssl_verify);
    tracing::info!("Tautulli Timeout: {:?}", tautulli_config.timeout);
    tracing::info!("Serve port: {}", server_config.serve_port);
}

/// Resolves on SIGTERM (container stop) or Ctrl-C.
async fn shutdown_signal() {
    let mut sig_term = match signal(SignalKind::terminate()) {
        Ok(sig_term) => sig_term,
        Err(err) => {
            tracing::error!("Failed to register SIGTERM handler: {}", err);
            if let Err(err) = ctrl_c().await {
                tracing::error!("Failed to listen for Ctrl-C: {}", err);
            }
            return;
        }
    };
    tokio::select! {
        _ = sig_term.recv() => {
            tracing::info!("Received SIGTERM. Exiting...");
        }
        _ = ctrl_c() => {
            tracing::info!("Received SIGINT. Exiting...");
        }
    }
}
