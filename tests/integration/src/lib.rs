//! End-to-end session tests live under `tests/`.

use sovr_console::{Config, MockProvider, Session};

/// Session over a deterministic provider and stock timings.
pub fn test_session() -> Session {
    Session::new(Config::default_local(), Box::new(MockProvider::seeded(1)))
}
