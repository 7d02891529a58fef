//! Shadow projection math
//!
//! Pure what-if computation over a staged transaction and a shock
//! scenario. Nothing here touches ledger state; the session only records
//! that a projection ran.

use serde::{Deserialize, Serialize};

/// Stability score floor: projections never report below this.
pub const MIN_STABILITY_SCORE: f64 = 40.0;

/// Baseline stability before any stress is applied.
pub const BASE_STABILITY_SCORE: f64 = 98.0;

/// Extra penalty applied under a cascade scenario.
const CASCADE_PENALTY: f64 = 20.0;

/// Shock scenario applied to the shadow state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scenario {
    Normal,
    Depeg,
    Cascade,
}

impl Scenario {
    pub fn all() -> [Self; 3] {
        [Self::Normal, Self::Depeg, Self::Cascade]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Normal => "Standard Load",
            Self::Depeg => "USDC Volatility",
            Self::Cascade => "Black Swan",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Normal => "Baseline protocol performance under typical volume.",
            Self::Depeg => "Simulates a 5% deviation in external stablecoin peg.",
            Self::Cascade => "Mass liquidation event and rapid vault rebalancing.",
        }
    }
}

/// Result of a shadow projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    /// Projected slippage as a percentage of staged volume against TVL.
    pub slippage_pct: f64,
    /// Stability score in `[MIN_STABILITY_SCORE, BASE_STABILITY_SCORE]`.
    pub stability_score: f64,
}

/// Project the impact of a staged amount under a stress level (clamped to
/// 1..=10) and a scenario, against a fixed TVL.
pub fn project(staged_amount: f64, stress_level: u8, scenario: Scenario, tvl: f64) -> Projection {
    let stress = f64::from(stress_level.clamp(1, 10));

    let slippage_pct = staged_amount / tvl * 100.0 * (stress / 2.0);

    let penalty = match scenario {
        Scenario::Cascade => CASCADE_PENALTY,
        _ => 0.0,
    };
    let stability_score = (BASE_STABILITY_SCORE - 4.0 * stress - penalty).max(MIN_STABILITY_SCORE);

    Projection {
        slippage_pct,
        stability_score,
    }
}
