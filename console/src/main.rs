//! SOVR Console Service
//!
//! Headless session daemon: holds the mock ledger session, streams the
//! background protocol pulse, and reports status over process logs.

use anyhow::Result;
use sovr_console::pulse::{self, INITIAL_LATENCY_MS};
use sovr_console::{Config, MockProvider, Session};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time;

const STATUS_INTERVAL_SECS: u64 = 30;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting SOVR Console Service");

    // Load configuration
    let config = Config::load().unwrap_or_else(|_| {
        log::warn!("Failed to load config, using local defaults");
        Config::default_local()
    });

    let session = Session::new(config.clone(), Box::new(MockProvider::from_entropy()));
    log::info!(
        "Session seeded: {} USDC / {} usdSOVR ({:?} access)",
        session.user().usdc_balance,
        session.user().usd_sovr_balance,
        session.user().role,
    );

    let session = Arc::new(Mutex::new(session));
    let latency = Arc::new(AtomicU32::new(INITIAL_LATENCY_MS));

    // Background pulse tasks run until process teardown
    tokio::spawn(pulse::run_feed(
        session.clone(),
        Duration::from_secs(config.feed_interval_secs),
    ));
    tokio::spawn(pulse::run_latency(
        latency.clone(),
        Duration::from_secs(config.latency_interval_secs),
    ));

    log::info!("Console session started. Streaming protocol pulse...");

    // Main status loop
    let mut interval = time::interval(Duration::from_secs(STATUS_INTERVAL_SECS));

    loop {
        interval.tick().await;

        let session = session.lock().await;
        log::debug!(
            "feed entries: {}, latency: {}ms",
            session.feed().len(),
            latency.load(Ordering::Relaxed),
        );

        if let Some(latest) = session.feed().latest() {
            log::debug!("latest feed entry [{}]: {}", latest.timestamp, latest.message);
        }
    }
}
