//! SOVR console session engine
//!
//! Async service layer over the pure ledger model: configuration, the
//! session handle with its delay-then-mutate operations, the mock
//! crypto-artifact provider, and the background protocol pulse.

pub mod attest;
pub mod config;
pub mod provider;
pub mod pulse;
pub mod session;

pub use config::Config;
pub use provider::{ArtifactProvider, MockProvider};
pub use session::{Session, SessionError, SwapReceipt};
