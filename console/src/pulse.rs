//! Background protocol pulse
//!
//! Two recurring tasks for the life of the process: a canned-event feed
//! appender and a jittering latency gauge. Neither coordinates with the
//! other or with session operations beyond locking the session to append.

use crate::session::Session;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use sovr_ledger::LogKind;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time;

/// Canned protocol events appended by the background feed.
pub const FEED_EVENTS: [&str; 4] = [
    "Block #19432105 validated by Keeper Node #04",
    "Liquidity Pool #01 TWAP update: $0.9984",
    "New Settlement Request [TX-9029] pending signature",
    "Reserve Manager: Collateral Ratio sweep completed",
];

pub const INITIAL_LATENCY_MS: u32 = 24;
pub const MIN_LATENCY_MS: u32 = 12;
pub const MAX_LATENCY_MS: u32 = 60;

/// Displayed protocol-pulse latency, stepped by a bounded random walk.
#[derive(Debug, Clone, Copy)]
pub struct LatencyGauge {
    ms: u32,
}

impl LatencyGauge {
    pub fn new() -> Self {
        Self {
            ms: INITIAL_LATENCY_MS,
        }
    }

    pub fn ms(&self) -> u32 {
        self.ms
    }

    /// Take one step of at most +/-2ms, clamped to the display band.
    pub fn step(&mut self, rng: &mut impl Rng) -> u32 {
        let delta: i32 = rng.gen_range(-2..=2);
        self.ms = (self.ms as i32 + delta).clamp(MIN_LATENCY_MS as i32, MAX_LATENCY_MS as i32) as u32;
        self.ms
    }
}

impl Default for LatencyGauge {
    fn default() -> Self {
        Self::new()
    }
}

/// Append a random canned event to the session feed every `period`,
/// unconditionally, until the task is dropped.
pub async fn run_feed(session: Arc<Mutex<Session>>, period: Duration) {
    let mut rng = StdRng::from_entropy();
    let mut ticker = time::interval(period);
    ticker.tick().await;

    loop {
        ticker.tick().await;
        // unwrap is fine: FEED_EVENTS is non-empty
        let event = *FEED_EVENTS.choose(&mut rng).unwrap();
        session.lock().await.push_feed(event, LogKind::Info);
        log::debug!("protocol pulse: {}", event);
    }
}

/// Step the latency gauge every `period`, publishing into `shared`.
pub async fn run_latency(shared: Arc<AtomicU32>, period: Duration) {
    let mut rng = StdRng::from_entropy();
    let mut gauge = LatencyGauge::new();
    let mut ticker = time::interval(period);
    ticker.tick().await;

    loop {
        ticker.tick().await;
        let ms = gauge.step(&mut rng);
        shared.store(ms, Ordering::Relaxed);
        log::debug!("pulse latency: {}ms", ms);
    }
}
