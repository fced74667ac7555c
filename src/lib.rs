//! # Tradebook
//!
//! A personal trading-performance journal engine: trades go in with a
//! pre-trade discipline checklist, and performance analytics (P&L, win rate,
//! drawdown), an equity curve, a behavioral discipline score, and the
//! session-archival transition come out.
//!
//! The engine is purely synchronous and side-effect-free: every operation is
//! a function of the `UserProfile` it receives, and identical inputs always
//! yield identical outputs. Persistence, authentication, import/export, and
//! rendering are collaborators outside this workspace; they consume the types
//! re-exported here.

pub use analytics::{EquityPoint, Metrics, MetricsEngine};
pub use configuration::{Config, TradeDefaults, load_config};
pub use core_types::{
    ArchivedSession, ChecklistAnswers, DisciplineChecklist, OptionType, Trade, TradeDirection,
    TradeStatus, UserProfile, UserSettings,
};
pub use discipline::{DisciplineScorer, ScoreCard, daily_trade_count};
pub use journal::{JournalError, TradeDraft, archive_and_reset, log_trade, validate_trade};
