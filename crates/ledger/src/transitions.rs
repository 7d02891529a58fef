//! Balance transitions: 1:1 conversions between the two session tokens
//!
//! Every function here is total over validated input and mutates the user
//! ledger at exactly one point, so a caller that stops before the call
//! observes no intermediate state.

use crate::error::LedgerError;
use crate::state::{Token, UserState};

/// Quote multiplier shown on the output side of a swap preview.
/// Cosmetic only: stored balances always move 1:1.
pub const PREVIEW_FEE_FACTOR: f64 = 0.998;

/// Parse a user-entered amount string.
///
/// Accepts what the console's input filter accepts: ASCII digits with at
/// most one decimal point. Signs, exponents, and hex are rejected, as is
/// anything that does not come out strictly positive.
pub fn parse_amount(raw: &str) -> Result<f64, LedgerError> {
    let invalid = || LedgerError::InvalidAmount {
        raw: raw.to_string(),
    };

    if raw.is_empty() || raw == "." {
        return Err(invalid());
    }

    let mut seen_dot = false;
    for c in raw.chars() {
        match c {
            '0'..='9' => {}
            '.' if !seen_dot => seen_dot = true,
            _ => return Err(invalid()),
        }
    }

    let value: f64 = raw.parse().map_err(|_| invalid())?;
    if value > 0.0 && value.is_finite() {
        Ok(value)
    } else {
        Err(invalid())
    }
}

/// Debit `from` and credit its counter-token by the same amount.
///
/// Validates before touching anything; on success both balances move in
/// one step.
pub fn transfer(user: &mut UserState, from: Token, amount: f64) -> Result<(), LedgerError> {
    if !(amount > 0.0) || !amount.is_finite() {
        return Err(LedgerError::InvalidAmount {
            raw: amount.to_string(),
        });
    }

    let available = user.balance_of(from);
    if amount > available {
        return Err(LedgerError::InsufficientBalance {
            token: from,
            available,
            requested: amount,
        });
    }

    *user.balance_of_mut(from) -= amount;
    *user.balance_of_mut(from.other()) += amount;
    Ok(())
}

/// Mint: convert USDC collateral into usdSOVR.
pub fn mint(user: &mut UserState, amount: f64) -> Result<(), LedgerError> {
    transfer(user, Token::Usdc, amount)
}

/// Redeem: convert usdSOVR back into USDC.
pub fn redeem(user: &mut UserState, amount: f64) -> Result<(), LedgerError> {
    transfer(user, Token::UsdSovr, amount)
}

/// Output-side preview of a swap quote. Display only.
pub fn preview_out(amount: f64) -> f64 {
    amount * PREVIEW_FEE_FACTOR
}
