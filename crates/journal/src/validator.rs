use crate::error::JournalError;
use chrono::{DateTime, NaiveDate, Utc};
use core_types::{ChecklistAnswers, OptionType, Trade, TradeDirection, TradeStatus, UserProfile};
use discipline::{DisciplineScorer, daily_trade_count};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

/// The raw trade entry as submitted by the journal UI, before the engine has
/// assigned an identity or a discipline score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeDraft {
    pub ticker: String,
    pub option_type: OptionType,
    pub strike: Decimal,
    pub expiration: NaiveDate,
    pub direction: TradeDirection,
    pub quantity: i32,
    pub status: TradeStatus,
    pub entry_date: DateTime<Utc>,
    pub entry_price: Decimal,
    pub exit_price: Option<Decimal>,
    pub pnl: Option<Decimal>,
    pub fees: Decimal,
    pub target_price: Option<Decimal>,
    pub stop_loss_price: Option<Decimal>,
    /// Free text supplied by the trader. Kept only when the scored checklist
    /// is imperfect; the engine never invents this text.
    pub violation_reason: Option<String>,
}

/// Normalizes and validates a single trade record before it enters the ledger.
///
/// The rules here are the write-side counterpart of the tolerance in
/// `analytics`: nothing the journal accepts can confuse the read side.
pub fn validate_trade(trade: &Trade) -> Result<(), JournalError> {
    // --- Lifecycle consistency ---
    match trade.status {
        TradeStatus::Closed => {
            if trade.pnl.is_none() || trade.exit_price.is_none() {
                return Err(JournalError::InconsistentLifecycle(
                    "a closed trade must carry an exit price and a realized pnl".to_string(),
                ));
            }
        }
        TradeStatus::Open => {
            if trade.pnl.is_some() || trade.exit_price.is_some() {
                return Err(JournalError::InconsistentLifecycle(
                    "an open trade must not carry an exit price or a realized pnl".to_string(),
                ));
            }
        }
    }

    // --- Numeric fields ---
    if trade.entry_price <= Decimal::ZERO {
        return Err(JournalError::InvalidField {
            field: "entry_price".to_string(),
            reason: "must be greater than 0".to_string(),
        });
    }
    if trade.fees.is_sign_negative() {
        return Err(JournalError::InvalidField {
            field: "fees".to_string(),
            reason: "must not be negative".to_string(),
        });
    }
    if trade.quantity == 0 {
        return Err(JournalError::InvalidField {
            field: "quantity".to_string(),
            reason: "must not be zero".to_string(),
        });
    }

    // --- Discipline payload consistency ---
    if trade.discipline_score > 100 {
        return Err(JournalError::InvalidField {
            field: "discipline_score".to_string(),
            reason: "must be in 0..=100".to_string(),
        });
    }
    if let Some(reason) = &trade.violation_reason {
        if reason.is_empty() {
            return Err(JournalError::InvalidField {
                field: "violation_reason".to_string(),
                reason: "must not be empty when present".to_string(),
            });
        }
        if trade.discipline_score == 100 {
            return Err(JournalError::InvalidField {
                field: "violation_reason".to_string(),
                reason: "must be absent when every rule was satisfied".to_string(),
            });
        }
    }

    Ok(())
}

/// Scores, validates, and records one new trade on the profile's ledger.
///
/// The discipline checklist is evaluated against the trades already logged on
/// the draft's calendar day, the draft is stamped with a fresh id and the
/// scored checklist, validated, and prepended to the ledger
/// (most-recent-first display order).
pub fn log_trade(
    profile: &mut UserProfile,
    draft: TradeDraft,
    answers: &ChecklistAnswers,
) -> Result<Uuid, JournalError> {
    let scorer = DisciplineScorer::new(profile.settings.clone())?;
    let existing_daily_count = daily_trade_count(&profile.trades, draft.entry_date.date_naive());
    let card = scorer.evaluate(answers, existing_daily_count);

    let trade = Trade {
        id: Uuid::new_v4(),
        ticker: draft.ticker,
        option_type: draft.option_type,
        strike: draft.strike,
        expiration: draft.expiration,
        direction: draft.direction,
        quantity: draft.quantity,
        status: draft.status,
        entry_date: draft.entry_date,
        entry_price: draft.entry_price,
        exit_price: draft.exit_price,
        pnl: draft.pnl,
        fees: draft.fees,
        target_price: draft.target_price,
        stop_loss_price: draft.stop_loss_price,
        checklist: card.checklist,
        discipline_score: card.score,
        // A perfect card carries no violation text, whatever the UI sent.
        violation_reason: if card.is_perfect() {
            None
        } else {
            draft.violation_reason
        },
    };

    validate_trade(&trade)?;

    debug!(
        trade_id = %trade.id,
        ticker = %trade.ticker,
        score = trade.discipline_score,
        "trade logged"
    );

    let id = trade.id;
    profile.trades.insert(0, trade);
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn settings() -> core_types::UserSettings {
        core_types::UserSettings {
            default_profit_target_pct: dec!(0.5),
            default_stop_loss_pct: dec!(0.2),
            max_trades_per_day: dec!(2),
            max_risk_per_trade_pct: dec!(0.02),
        }
    }

    fn profile() -> UserProfile {
        UserProfile::new(
            "test",
            dec!(10000),
            Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(),
            settings(),
        )
    }

    fn draft(status: TradeStatus) -> TradeDraft {
        let closed = status.is_closed();
        TradeDraft {
            ticker: "SPY".to_string(),
            option_type: OptionType::Put,
            strike: dec!(440),
            expiration: NaiveDate::from_ymd_opt(2024, 4, 19).unwrap(),
            direction: TradeDirection::Long,
            quantity: 2,
            status,
            entry_date: Utc.with_ymd_and_hms(2024, 3, 12, 14, 30, 0).unwrap(),
            entry_price: dec!(1.80),
            exit_price: closed.then(|| dec!(2.20)),
            pnl: closed.then(|| dec!(80)),
            fees: dec!(2.60),
            target_price: None,
            stop_loss_price: None,
            violation_reason: None,
        }
    }

    fn all_yes() -> ChecklistAnswers {
        ChecklistAnswers {
            strategy_alignment: true,
            risk_defined: true,
            size_within_limits: true,
            market_conditions_favorable: true,
            emotional_state_stable: true,
        }
    }

    #[test]
    fn logging_prepends_a_scored_trade() {
        let mut profile = profile();
        log_trade(&mut profile, draft(TradeStatus::Closed), &all_yes()).unwrap();
        let id = log_trade(&mut profile, draft(TradeStatus::Open), &all_yes()).unwrap();

        assert_eq!(profile.trades.len(), 2);
        // Most-recent-first display order.
        assert_eq!(profile.trades[0].id, id);
        assert_eq!(profile.trades[0].discipline_score, 100);
        assert!(profile.trades[0].checklist.daily_limit_respected);
    }

    #[test]
    fn daily_limit_flag_reflects_earlier_trades_that_day() {
        let mut profile = profile();
        // Two closed trades consume 2.0 of a 2.0/day limit.
        log_trade(&mut profile, draft(TradeStatus::Closed), &all_yes()).unwrap();
        log_trade(&mut profile, draft(TradeStatus::Closed), &all_yes()).unwrap();

        let mut third = draft(TradeStatus::Open);
        third.violation_reason = Some("overtraded".to_string());
        let id = log_trade(&mut profile, third, &all_yes()).unwrap();

        let trade = &profile.trades[0];
        assert_eq!(trade.id, id);
        assert!(!trade.checklist.daily_limit_respected);
        assert_eq!(trade.discipline_score, 83);
        assert_eq!(trade.violation_reason.as_deref(), Some("overtraded"));
    }

    #[test]
    fn violation_text_is_dropped_on_a_perfect_card() {
        let mut profile = profile();
        let mut entry = draft(TradeStatus::Open);
        entry.violation_reason = Some("leftover UI state".to_string());
        log_trade(&mut profile, entry, &all_yes()).unwrap();
        assert_eq!(profile.trades[0].violation_reason, None);
    }

    #[test]
    fn open_trade_with_pnl_is_rejected() {
        let mut profile = profile();
        let mut entry = draft(TradeStatus::Open);
        entry.pnl = Some(dec!(50));
        let err = log_trade(&mut profile, entry, &all_yes());
        assert!(matches!(err, Err(JournalError::InconsistentLifecycle(_))));
        assert!(profile.trades.is_empty());
    }

    #[test]
    fn closed_trade_without_pnl_is_rejected() {
        let mut profile = profile();
        let mut entry = draft(TradeStatus::Closed);
        entry.pnl = None;
        assert!(log_trade(&mut profile, entry, &all_yes()).is_err());
    }

    #[test]
    fn negative_fees_are_rejected() {
        let mut profile = profile();
        let mut entry = draft(TradeStatus::Open);
        entry.fees = dec!(-1);
        let err = log_trade(&mut profile, entry, &all_yes());
        assert!(matches!(
            err,
            Err(JournalError::InvalidField { field, .. }) if field == "fees"
        ));
    }

    #[test]
    fn zero_quantity_is_rejected() {
        let mut profile = profile();
        let mut entry = draft(TradeStatus::Open);
        entry.quantity = 0;
        assert!(log_trade(&mut profile, entry, &all_yes()).is_err());
    }
}
