//! Pure state model for the SOVR session ledger
//!
//! Everything in this crate is synchronous and side-effect free: balances,
//! the bounded terminal feed, the bounded swap history, and the shadow
//! projection math. Simulated latency, randomness, and logging live in the
//! console crate; this crate only defines what a transition does to state.

pub mod error;
pub mod feed;
pub mod history;
pub mod simulator;
pub mod state;
pub mod transitions;

pub use error::LedgerError;
pub use feed::{LogBuffer, LogEntry, LogKind};
pub use history::{SwapHistory, SwapRecord, SwapStatus};
pub use simulator::{project, Projection, Scenario};
pub use state::{ProtocolStats, Role, Token, UserState};
