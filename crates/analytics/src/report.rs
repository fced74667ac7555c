use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The summary statistics shown on the dashboard.
///
/// This struct is the final output of the `MetricsEngine` and is derived on
/// every read; it is never persisted. All percentage fields are in [0, 100].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Every trade in the ledger, open or closed.
    pub total_trades: usize,
    /// Percentage of closed trades with a positive pnl. 0 when nothing has
    /// closed yet.
    pub win_rate_pct: Decimal,
    /// Sum of realized pnl. Open trades contribute nothing.
    pub total_pnl: Decimal,
    /// total_pnl / closed-trade count, 0 if none.
    pub average_pnl: Decimal,
    /// Mean per-trade discipline score over ALL trades. Open trades count:
    /// the score reflects entry behavior, not outcome.
    pub discipline_score: Decimal,
    /// Largest peak-to-trough decline in cumulative realized P&L.
    pub max_drawdown: Decimal,
}

impl Metrics {
    /// Creates a new, zeroed-out Metrics report.
    /// This is the documented result for an empty ledger.
    pub fn new() -> Self {
        Self {
            total_trades: 0,
            win_rate_pct: Decimal::ZERO,
            total_pnl: Decimal::ZERO,
            average_pnl: Decimal::ZERO,
            discipline_score: Decimal::ZERO,
            max_drawdown: Decimal::ZERO,
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

/// One point of the reconstructed account balance, consumed by the chart
/// layer and the drawdown calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquityPoint {
    /// "Start" for the synthetic opening point, otherwise the trade's entry
    /// date.
    pub label: String,
    pub balance: Decimal,
}
