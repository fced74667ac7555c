use crate::enums::{OptionType, TradeDirection, TradeStatus};
use crate::error::CoreError;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single options position in the journal.
///
/// A trade is created once, tagged with its discipline checklist and score at
/// entry time, and never silently mutated afterwards. Realized P&L exists only
/// on a `Closed` trade; the `realized_pnl` accessor is the one place that
/// invariant is enforced on the read side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub id: Uuid,

    // Instrument descriptor.
    pub ticker: String,
    pub option_type: OptionType,
    pub strike: Decimal,
    pub expiration: NaiveDate,
    pub direction: TradeDirection,
    /// Signed contract count.
    pub quantity: i32,

    // Lifecycle.
    pub status: TradeStatus,
    pub entry_date: DateTime<Utc>,

    // Economics.
    pub entry_price: Decimal,
    pub exit_price: Option<Decimal>,
    pub pnl: Option<Decimal>,
    pub fees: Decimal,
    /// Planning fields. Not used in scoring.
    pub target_price: Option<Decimal>,
    pub stop_loss_price: Option<Decimal>,

    // Discipline payload, fixed at creation time.
    pub checklist: DisciplineChecklist,
    pub discipline_score: u8,
    pub violation_reason: Option<String>,
}

impl Trade {
    /// The P&L recognized by this trade, or `None` for an open position.
    ///
    /// A malformed record (an `Open` trade carrying a pnl, e.g. from an
    /// external import) is treated as having no realized P&L rather than
    /// poisoning downstream aggregates.
    pub fn realized_pnl(&self) -> Option<Decimal> {
        match self.status {
            TradeStatus::Closed => self.pnl,
            TradeStatus::Open => None,
        }
    }
}

/// The fixed set of pre-trade discipline rules, answered at entry time.
///
/// Five of the six flags are answered by the trader. `daily_limit_respected`
/// is reserved for the engine: it is computed from the day's trade count and
/// the profile's configured limit, and cannot be toggled by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisciplineChecklist {
    pub strategy_alignment: bool,
    pub risk_defined: bool,
    pub size_within_limits: bool,
    pub market_conditions_favorable: bool,
    pub emotional_state_stable: bool,
    /// Engine-computed. See `discipline::DisciplineScorer`.
    pub daily_limit_respected: bool,
}

impl DisciplineChecklist {
    /// The total number of checklist rules, manual and computed.
    pub const ITEM_COUNT: usize = 6;

    /// How many of the rules were satisfied.
    pub fn true_count(&self) -> usize {
        [
            self.strategy_alignment,
            self.risk_defined,
            self.size_within_limits,
            self.market_conditions_favorable,
            self.emotional_state_stable,
            self.daily_limit_respected,
        ]
        .iter()
        .filter(|answered| **answered)
        .count()
    }
}

/// The caller-facing half of the checklist: only the manually answered rules.
///
/// Constructed explicitly by the journal UI; the scorer merges in the computed
/// daily-limit flag to produce the full `DisciplineChecklist`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistAnswers {
    pub strategy_alignment: bool,
    pub risk_defined: bool,
    pub size_within_limits: bool,
    pub market_conditions_favorable: bool,
    pub emotional_state_stable: bool,
}

/// Per-profile trading configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSettings {
    /// Default profit target as a fraction of entry (e.g. 0.5 for 50%).
    pub default_profit_target_pct: Decimal,
    /// Default stop-loss as a fraction of entry.
    pub default_stop_loss_pct: Decimal,
    /// Maximum trades per calendar day. Fractional: an open and its matching
    /// close each consume 0.5.
    pub max_trades_per_day: Decimal,
    /// Maximum risk per trade as a fraction of current balance.
    pub max_risk_per_trade_pct: Decimal,
}

impl UserSettings {
    /// Validates that the configured limits are logical.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.max_trades_per_day <= Decimal::ZERO {
            return Err(CoreError::InvalidInput(
                "max_trades_per_day".to_string(),
                "must be greater than 0".to_string(),
            ));
        }
        if self.max_risk_per_trade_pct <= Decimal::ZERO {
            return Err(CoreError::InvalidInput(
                "max_risk_per_trade_pct".to_string(),
                "must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// An immutable snapshot of a completed trading period.
///
/// Fields are private by design: once an archive is constructed its trades,
/// totals, and final balance can never be rewritten, regardless of what
/// happens to the active ledger afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchivedSession {
    id: Uuid,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    initial_capital: Decimal,
    final_balance: Decimal,
    total_pnl: Decimal,
    trade_count: usize,
    trades: Vec<Trade>,
}

impl ArchivedSession {
    /// Freezes a trading period into an archive record.
    ///
    /// Takes ownership of a copied trade list; `final_balance` and
    /// `trade_count` are derived here so they can never drift from the
    /// snapshotted trades.
    pub fn new(
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
        initial_capital: Decimal,
        total_pnl: Decimal,
        trades: Vec<Trade>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            start_date,
            end_date,
            initial_capital,
            final_balance: initial_capital + total_pnl,
            total_pnl,
            trade_count: trades.len(),
            trades,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn start_date(&self) -> DateTime<Utc> {
        self.start_date
    }

    pub fn end_date(&self) -> DateTime<Utc> {
        self.end_date
    }

    pub fn initial_capital(&self) -> Decimal {
        self.initial_capital
    }

    pub fn final_balance(&self) -> Decimal {
        self.final_balance
    }

    pub fn total_pnl(&self) -> Decimal {
        self.total_pnl
    }

    pub fn trade_count(&self) -> usize {
        self.trade_count
    }

    pub fn trades(&self) -> &[Trade] {
        &self.trades
    }
}

/// The aggregate root for one trader: the active ledger, its configuration,
/// and the append-only archive history.
///
/// The profile is a plain value. Engine operations take it by reference and
/// mutate it in memory; the caller owns persistence and decides when the new
/// state becomes durable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub display_name: String,
    /// Starting capital of the current period.
    pub initial_capital: Decimal,
    /// Start of the current period.
    pub start_date: DateTime<Utc>,
    /// Active ledger, most-recent-first. Not assumed chronological.
    pub trades: Vec<Trade>,
    /// Completed periods, newest-first. Append-only.
    pub archives: Vec<ArchivedSession>,
    pub settings: UserSettings,
}

impl UserProfile {
    /// Creates a fresh profile with an empty ledger and no archive history.
    pub fn new(
        display_name: impl Into<String>,
        initial_capital: Decimal,
        start_date: DateTime<Utc>,
        settings: UserSettings,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            display_name: display_name.into(),
            initial_capital,
            start_date,
            trades: Vec::new(),
            archives: Vec::new(),
            settings,
        }
    }
}
