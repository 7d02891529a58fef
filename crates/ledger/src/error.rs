//! Error taxonomy for ledger transitions

use crate::state::Token;
use thiserror::Error;

/// A transition refused before any state was touched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// The raw amount did not parse to a positive decimal number.
    #[error("invalid amount: {raw:?}")]
    InvalidAmount { raw: String },

    /// The source balance cannot cover the requested debit.
    #[error("insufficient {token} balance: have {available}, need {requested}")]
    InsufficientBalance {
        token: Token,
        available: f64,
        requested: f64,
    },
}
