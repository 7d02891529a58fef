//! Session handle and its delay-then-mutate operations
//!
//! [`Session`] is the single explicit owner of all mutable session state:
//! the user ledger, the protocol snapshot, the terminal feed, and the swap
//! history. Each simulated operation validates its input up front, sleeps
//! the configured latency, then mutates state at one point. Dropping an
//! operation future before it completes leaves state untouched.

use crate::attest::{self, SIGN_STEPS};
use crate::config::Config;
use crate::provider::ArtifactProvider;
use sovr_ledger::{
    transitions, LedgerError, LogBuffer, LogKind, Projection, ProtocolStats, Scenario,
    SwapHistory, SwapRecord, SwapStatus, Token, UserState,
};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use thiserror::Error;
use tokio::time;

/// Fixed display block number quoted in swap confirmations.
const CONFIRMATION_BLOCK: u64 = 19_432_108;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("wallet not connected")]
    WalletNotConnected,

    #[error("unknown attestation request: {0}")]
    UnknownRequest(String),

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

/// Outcome of a confirmed swap.
#[derive(Debug, Clone, PartialEq)]
pub struct SwapReceipt {
    pub id: u64,
    pub from: Token,
    pub to: Token,
    pub amount: f64,
    pub tx_hash: String,
}

pub struct Session {
    user: UserState,
    stats: ProtocolStats,
    feed: LogBuffer,
    history: SwapHistory,
    config: Config,
    provider: Box<dyn ArtifactProvider + Send>,
    next_swap_id: u64,
}

impl Session {
    pub fn new(config: Config, provider: Box<dyn ArtifactProvider + Send>) -> Self {
        let mut session = Self {
            user: UserState::seed(),
            stats: ProtocolStats::snapshot(),
            feed: LogBuffer::new(),
            history: SwapHistory::new(),
            config,
            provider,
            next_swap_id: 1,
        };
        session.push_feed("Initializing SOVR V2 Secure Environment...", LogKind::Info);
        session.push_feed("Listening to EIP-712 Attestation Events...", LogKind::Cmd);
        session
    }

    pub fn user(&self) -> &UserState {
        &self.user
    }

    pub fn stats(&self) -> &ProtocolStats {
        &self.stats
    }

    pub fn feed(&self) -> &LogBuffer {
        &self.feed
    }

    pub fn history(&self) -> &SwapHistory {
        &self.history
    }

    /// Append a timestamped entry to the terminal feed.
    pub fn push_feed(&mut self, message: impl Into<String>, kind: LogKind) {
        self.feed.push(message, kind, timestamp_now());
    }

    /// Store a provider-generated address on the user.
    pub fn connect_wallet(&mut self) -> String {
        let address = self.provider.wallet_address();
        self.push_feed(
            format!("Wallet Connected: {}", shorten(&address)),
            LogKind::Success,
        );
        self.user.address = Some(address.clone());
        address
    }

    pub fn disconnect_wallet(&mut self) {
        self.user.address = None;
        self.push_feed("Wallet Disconnected", LogKind::Warn);
    }

    /// Swap `raw_amount` of `from` into its counter-token, 1:1.
    ///
    /// Direction follows `from`, so a flipped call debits and credits the
    /// swapped fields. Confirmed swaps land in the history window.
    pub async fn swap(&mut self, from: Token, raw_amount: &str) -> Result<SwapReceipt, SessionError> {
        let amount = self.stage(from, raw_amount)?;
        let to = from.other();

        self.push_feed(
            format!("Initiating Router Request: {} {} -> {}", raw_amount, from, to),
            LogKind::Cmd,
        );
        log::info!("swap staged: {} {} -> {}", amount, from, to);

        time::sleep(Duration::from_millis(self.config.swap_delay_ms)).await;

        transitions::transfer(&mut self.user, from, amount)?;
        let tx_hash = self.provider.transaction_hash();
        self.push_feed(
            format!(
                "Swap Confirmed. Block #{}. Hash: {}",
                CONFIRMATION_BLOCK, tx_hash
            ),
            LogKind::Success,
        );

        let id = self.next_swap_id;
        self.next_swap_id += 1;
        self.history.record(SwapRecord {
            id,
            from,
            to,
            amount,
            timestamp: timestamp_now(),
            status: SwapStatus::Confirmed,
        });
        log::info!("swap {} confirmed: {}", id, tx_hash);

        Ok(SwapReceipt {
            id,
            from,
            to,
            amount,
            tx_hash,
        })
    }

    /// Mint usdSOVR against USDC collateral.
    pub async fn mint(&mut self, raw_amount: &str) -> Result<(), SessionError> {
        self.reserve_op(Token::Usdc, raw_amount, "Minting", "Mint Confirmed")
            .await
    }

    /// Redeem usdSOVR back into USDC.
    pub async fn redeem(&mut self, raw_amount: &str) -> Result<(), SessionError> {
        self.reserve_op(Token::UsdSovr, raw_amount, "Redeeming", "Redemption Confirmed")
            .await
    }

    async fn reserve_op(
        &mut self,
        from: Token,
        raw_amount: &str,
        verb: &str,
        confirmation: &str,
    ) -> Result<(), SessionError> {
        let amount = self.stage(from, raw_amount)?;

        self.push_feed(
            format!("Reserve Manager: {} {} {}", verb, raw_amount, from),
            LogKind::Cmd,
        );

        time::sleep(Duration::from_millis(self.config.reserve_delay_ms)).await;

        transitions::transfer(&mut self.user, from, amount)?;
        self.push_feed(confirmation, LogKind::Success);
        log::info!("{} {} {}", verb.to_lowercase(), amount, from);
        Ok(())
    }

    /// Run the three-step mock signing sequence for a pending request.
    ///
    /// Requires a connected wallet. The produced signature is random hex
    /// with no cryptographic meaning.
    pub async fn sign_attestation(&mut self, request_id: &str) -> Result<String, SessionError> {
        if !self.user.is_connected() {
            return Err(SessionError::WalletNotConnected);
        }
        let request = attest::find_request(request_id)
            .ok_or_else(|| SessionError::UnknownRequest(request_id.to_string()))?;

        self.push_feed(
            format!("Initiating Cryptographic Attestation for {}...", request.id),
            LogKind::Cmd,
        );

        for step in SIGN_STEPS {
            time::sleep(Duration::from_millis(self.config.sign_step_delay_ms)).await;
            self.push_feed(step, LogKind::Info);
        }

        let signature = self.provider.attestation_signature();
        self.push_feed(
            format!("Attestation Complete. Signature: {}...", &signature[..10]),
            LogKind::Success,
        );
        log::info!("attestation {} signed", request.id);
        Ok(signature)
    }

    /// Project a staged transaction against the shadow state.
    ///
    /// Touches nothing but the feed; the projection itself is pure.
    pub async fn run_projection(
        &mut self,
        staged_amount: f64,
        stress_level: u8,
        scenario: Scenario,
    ) -> Projection {
        self.push_feed(
            format!(
                "War Room: Injecting hypothetical {} SWAP into shadow state...",
                staged_amount
            ),
            LogKind::Cmd,
        );

        time::sleep(Duration::from_millis(self.config.projection_delay_ms)).await;

        let projection = sovr_ledger::project(staged_amount, stress_level, scenario, self.stats.tvl);
        self.push_feed(
            "Shadow Projection: State mapping complete. See Stability Gauge for delta.",
            LogKind::Success,
        );
        projection
    }

    /// Validate an operation before its delay is armed: parse the raw
    /// amount and refuse it if the source balance cannot cover it.
    fn stage(&self, from: Token, raw_amount: &str) -> Result<f64, SessionError> {
        let amount = transitions::parse_amount(raw_amount)?;
        let available = self.user.balance_of(from);
        if amount > available {
            return Err(LedgerError::InsufficientBalance {
                token: from,
                available,
                requested: amount,
            }
            .into());
        }
        Ok(amount)
    }
}

/// Wall-clock HH:MM:SS (UTC) for feed entries.
fn timestamp_now() -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!(
        "{:02}:{:02}:{:02}",
        secs / 3600 % 24,
        secs / 60 % 60,
        secs % 60
    )
}

fn shorten(address: &str) -> String {
    if address.len() > 10 {
        format!("{}...{}", &address[..6], &address[address.len() - 4..])
    } else {
        address.to_string()
    }
}
