//! Session state: the mock user ledger and the read-only protocol snapshot

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two tokens the session ledger tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Token {
    Usdc,
    UsdSovr,
}

impl Token {
    /// The counter-token of a 1:1 conversion.
    pub fn other(self) -> Self {
        match self {
            Token::Usdc => Token::UsdSovr,
            Token::UsdSovr => Token::Usdc,
        }
    }

    /// Market symbol as rendered in feeds and receipts.
    pub fn symbol(self) -> &'static str {
        match self {
            Token::Usdc => "USDC",
            Token::UsdSovr => "usdSOVR",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Access role attached to the session user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    User,
    Guardian,
    Keeper,
    Admin,
}

/// Per-session user ledger.
///
/// Created once at startup from [`UserState::seed`] and mutated only
/// through the transition functions. Not persisted anywhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserState {
    pub usdc_balance: f64,
    pub usd_sovr_balance: f64,
    pub role: Role,
    pub address: Option<String>,
}

impl UserState {
    /// Startup fixture: the balances every session begins with.
    pub fn seed() -> Self {
        Self {
            usdc_balance: 250_000.0,
            usd_sovr_balance: 120_000.0,
            role: Role::Admin,
            address: None,
        }
    }

    pub fn balance_of(&self, token: Token) -> f64 {
        match token {
            Token::Usdc => self.usdc_balance,
            Token::UsdSovr => self.usd_sovr_balance,
        }
    }

    pub(crate) fn balance_of_mut(&mut self, token: Token) -> &mut f64 {
        match token {
            Token::Usdc => &mut self.usdc_balance,
            Token::UsdSovr => &mut self.usd_sovr_balance,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.address.is_some()
    }
}

/// Protocol-wide display numbers.
///
/// A read-only snapshot: no session operation touches these, and nothing
/// reconciles them against user balances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProtocolStats {
    pub tvl: f64,
    pub usd_sovr_supply: f64,
    pub collateral_ratio: f64,
    pub usdc_reserves: f64,
    pub active_pools: u32,
    pub total_transactions: u64,
}

impl ProtocolStats {
    pub fn snapshot() -> Self {
        Self {
            tvl: 125_400_000.0,
            usd_sovr_supply: 45_000_000.0,
            collateral_ratio: 125.4,
            usdc_reserves: 56_430_000.0,
            active_pools: 14,
            total_transactions: 8432,
        }
    }
}
