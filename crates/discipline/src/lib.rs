//! # Tradebook Discipline Scorer
//!
//! This crate grades the pre-trade checklist that accompanies every journal
//! entry. It is the behavioral half of the engine: the score measures entry
//! discipline, never outcome.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** A pure logic crate with no knowledge of external
//!   systems. It depends only on `core-types` (Layer 0).
//! - **Informational, never a gate:** A score of 0 does not block a trade.
//!   The scorer only guarantees the score and the checklist flags are
//!   consistent with each other.
//!
//! ## Public API
//!
//! - `DisciplineScorer`: Merges the trader's answers with the computed
//!   daily-limit flag and produces a 0-100 score.
//! - `ScoreCard`: The scored checklist handed back to the journal.
//! - `daily_trade_count`: The half-weight counter feeding the limit check.

pub mod error;
pub mod scorer;

// Re-export the key components to create a clean, public-facing API.
pub use error::DisciplineError;
pub use scorer::{DisciplineScorer, ScoreCard, daily_trade_count};
