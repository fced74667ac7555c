use crate::report::{EquityPoint, Metrics};
use core_types::Trade;
use rust_decimal::Decimal;

/// A stateless calculator for deriving performance metrics from the ledger.
#[derive(Debug, Default)]
pub struct MetricsEngine {}

impl MetricsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The main entry point for calculating performance metrics.
    ///
    /// # Arguments
    ///
    /// * `trades` - The full ledger, open and closed trades in any order.
    ///
    /// # Returns
    ///
    /// The `Metrics` report. An empty ledger yields the zeroed report; no
    /// input can make this fail.
    pub fn calculate(&self, trades: &[Trade]) -> Metrics {
        let mut report = Metrics::new();

        if trades.is_empty() {
            return report;
        }

        self.calculate_profitability(trades, &mut report);
        self.calculate_discipline(trades, &mut report);

        // Drawdown is measured on cumulative realized P&L, so the curve's
        // starting capital cancels out; build it from zero.
        let curve = self.equity_curve(trades, Decimal::ZERO);
        self.calculate_drawdown(&curve, &mut report);

        report
    }

    /// Reconstructs the running account balance, oldest trade first.
    ///
    /// The curve starts with a synthetic "Start" point at `initial_capital`
    /// and gains one point per trade with a realized pnl, ordered by entry
    /// date ascending (stable: equal timestamps keep their relative order).
    /// Open or malformed trades emit no point and shift no balance.
    pub fn equity_curve(&self, trades: &[Trade], initial_capital: Decimal) -> Vec<EquityPoint> {
        let mut ordered: Vec<&Trade> = trades.iter().collect();
        ordered.sort_by_key(|trade| trade.entry_date);

        let mut points = Vec::with_capacity(ordered.len() + 1);
        points.push(EquityPoint {
            label: "Start".to_string(),
            balance: initial_capital,
        });

        let mut cumulative_pnl = Decimal::ZERO;
        for trade in ordered {
            if let Some(pnl) = trade.realized_pnl() {
                cumulative_pnl += pnl;
                points.push(EquityPoint {
                    label: trade.entry_date.format("%Y-%m-%d").to_string(),
                    balance: initial_capital + cumulative_pnl,
                });
            }
        }

        points
    }

    /// Calculates all profitability-related metrics from the closed subset.
    fn calculate_profitability(&self, trades: &[Trade], report: &mut Metrics) {
        report.total_trades = trades.len();

        let mut closed_trades = 0usize;
        let mut winning_trades = 0usize;

        for trade in trades {
            // Open trades neither help nor hurt; skip anything without a
            // realized pnl, including records malformed by an external import.
            let Some(pnl) = trade.realized_pnl() else {
                continue;
            };

            closed_trades += 1;
            report.total_pnl += pnl;
            if pnl.is_sign_positive() && !pnl.is_zero() {
                winning_trades += 1;
            }
        }

        if closed_trades > 0 {
            report.win_rate_pct = (Decimal::from(winning_trades) / Decimal::from(closed_trades))
                * Decimal::from(100);
            report.average_pnl = report.total_pnl / Decimal::from(closed_trades);
        }
    }

    /// Calculates the mean discipline score over ALL trades, open or closed.
    fn calculate_discipline(&self, trades: &[Trade], report: &mut Metrics) {
        if trades.is_empty() {
            return;
        }

        let score_sum: Decimal = trades
            .iter()
            .map(|trade| Decimal::from(trade.discipline_score))
            .sum();
        report.discipline_score = score_sum / Decimal::from(trades.len());
    }

    /// Calculates maximum drawdown from the equity curve.
    ///
    /// The running peak starts at the curve's opening point, so a ledger with
    /// no closed trades or a monotonically non-decreasing P&L reports zero.
    fn calculate_drawdown(&self, equity_curve: &[EquityPoint], report: &mut Metrics) {
        let mut max_drawdown = Decimal::ZERO;

        if equity_curve.is_empty() {
            return;
        }

        let mut peak_balance = equity_curve[0].balance;

        for point in equity_curve {
            if point.balance > peak_balance {
                peak_balance = point.balance;
            }
            let drawdown = peak_balance - point.balance;
            if drawdown > max_drawdown {
                max_drawdown = drawdown;
            }
        }

        report.max_drawdown = max_drawdown;
    }
}
