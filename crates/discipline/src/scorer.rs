use crate::error::DisciplineError;
use chrono::NaiveDate;
use core_types::{ChecklistAnswers, DisciplineChecklist, Trade, TradeStatus, UserSettings};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// The scored result of evaluating a checklist for one new trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreCard {
    /// The full checklist, manual answers merged with the computed
    /// daily-limit flag.
    pub checklist: DisciplineChecklist,
    /// round(100 * satisfied rules / total rules), in [0, 100].
    pub score: u8,
}

impl ScoreCard {
    /// True when every rule was satisfied. An imperfect card is the only
    /// state in which the caller may attach a violation reason.
    pub fn is_perfect(&self) -> bool {
        self.score == 100
    }
}

/// Grades the pre-trade checklist against the profile's configured limits.
///
/// The scorer owns one rule the trader cannot answer for themselves: whether
/// logging this trade stays within the daily trade limit. Everything else is
/// taken from the trader's answers as-is.
#[derive(Debug, Clone)]
pub struct DisciplineScorer {
    settings: UserSettings,
}

impl DisciplineScorer {
    /// Creates a new `DisciplineScorer` for the given profile settings.
    pub fn new(settings: UserSettings) -> Result<Self, DisciplineError> {
        // Validate that the limit parameters are logical.
        settings.validate()?;
        Ok(Self { settings })
    }

    /// Evaluates one new trade entry.
    ///
    /// `existing_daily_count` is the half-weight count of trades already
    /// logged on the same calendar day (see [`daily_trade_count`]). The new
    /// entry itself consumes 0.5, and the boundary is inclusive: a count that
    /// lands exactly on the limit still respects it.
    pub fn evaluate(&self, answers: &ChecklistAnswers, existing_daily_count: Decimal) -> ScoreCard {
        let daily_limit_respected =
            existing_daily_count + dec!(0.5) <= self.settings.max_trades_per_day;

        // Construct the full checklist explicitly. The computed flag is
        // read-only to the caller; there is no path for answers to override it.
        let checklist = DisciplineChecklist {
            strategy_alignment: answers.strategy_alignment,
            risk_defined: answers.risk_defined,
            size_within_limits: answers.size_within_limits,
            market_conditions_favorable: answers.market_conditions_favorable,
            emotional_state_stable: answers.emotional_state_stable,
            daily_limit_respected,
        };

        ScoreCard {
            score: score_checklist(&checklist),
            checklist,
        }
    }
}

/// Percentage of satisfied rules, rounded to the nearest integer.
fn score_checklist(checklist: &DisciplineChecklist) -> u8 {
    let total = DisciplineChecklist::ITEM_COUNT;
    if total == 0 {
        // The item set is fixed and non-empty; this guard is purely defensive.
        return 0;
    }

    let ratio = Decimal::from(checklist.true_count() * 100) / Decimal::from(total);
    ratio.round().to_u8().unwrap_or(0)
}

/// Half-weight count of trades logged on `day`.
///
/// An open position consumes 0.5; a closed one consumes 1.0, its open and its
/// close each counting 0.5. Opens and closes are counted separately at half
/// weight rather than per round-trip. That can undercount distinct trades on
/// busy days, but it is the product's definition of the limit and is kept
/// as-is.
pub fn daily_trade_count(trades: &[Trade], day: NaiveDate) -> Decimal {
    trades
        .iter()
        .filter(|trade| trade.entry_date.date_naive() == day)
        .map(|trade| match trade.status {
            TradeStatus::Open => dec!(0.5),
            TradeStatus::Closed => dec!(1.0),
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use core_types::{OptionType, TradeDirection};
    use uuid::Uuid;

    fn settings(max_trades_per_day: Decimal) -> UserSettings {
        UserSettings {
            default_profit_target_pct: dec!(0.5),
            default_stop_loss_pct: dec!(0.2),
            max_trades_per_day,
            max_risk_per_trade_pct: dec!(0.02),
        }
    }

    fn answers(value: bool) -> ChecklistAnswers {
        ChecklistAnswers {
            strategy_alignment: value,
            risk_defined: value,
            size_within_limits: value,
            market_conditions_favorable: value,
            emotional_state_stable: value,
        }
    }

    fn trade_on(day: u32, status: TradeStatus) -> Trade {
        let closed = status.is_closed();
        Trade {
            id: Uuid::new_v4(),
            ticker: "SPY".to_string(),
            option_type: OptionType::Call,
            strike: dec!(450),
            expiration: chrono::NaiveDate::from_ymd_opt(2024, 6, 21).unwrap(),
            direction: TradeDirection::Long,
            quantity: 1,
            status,
            entry_date: Utc.with_ymd_and_hms(2024, 3, day, 14, 30, 0).unwrap(),
            entry_price: dec!(2.50),
            exit_price: closed.then(|| dec!(3.00)),
            pnl: closed.then(|| dec!(50)),
            fees: dec!(1.30),
            target_price: None,
            stop_loss_price: None,
            checklist: DisciplineChecklist {
                strategy_alignment: true,
                risk_defined: true,
                size_within_limits: true,
                market_conditions_favorable: true,
                emotional_state_stable: true,
                daily_limit_respected: true,
            },
            discipline_score: 100,
            violation_reason: None,
        }
    }

    #[test]
    fn all_rules_satisfied_scores_100() {
        let scorer = DisciplineScorer::new(settings(dec!(5))).unwrap();
        let card = scorer.evaluate(&answers(true), Decimal::ZERO);
        assert_eq!(card.score, 100);
        assert!(card.is_perfect());
    }

    #[test]
    fn no_rules_satisfied_scores_0() {
        let scorer = DisciplineScorer::new(settings(dec!(5))).unwrap();
        // Over the limit as well, so all six rules fail.
        let card = scorer.evaluate(&answers(false), dec!(5.0));
        assert_eq!(card.score, 0);
        assert!(!card.checklist.daily_limit_respected);
    }

    #[test]
    fn three_of_six_rules_scores_50() {
        let scorer = DisciplineScorer::new(settings(dec!(5))).unwrap();
        let card = scorer.evaluate(
            &ChecklistAnswers {
                strategy_alignment: true,
                risk_defined: true,
                size_within_limits: false,
                market_conditions_favorable: false,
                emotional_state_stable: false,
            },
            Decimal::ZERO,
        );
        // Two manual rules plus the daily-limit flag.
        assert!(card.checklist.daily_limit_respected);
        assert_eq!(card.score, 50);
    }

    #[test]
    fn daily_limit_boundary_is_inclusive() {
        let scorer = DisciplineScorer::new(settings(dec!(5))).unwrap();

        // 4.0 + 0.5 = 4.5 <= 5 -> respected.
        assert!(
            scorer
                .evaluate(&answers(true), dec!(4.0))
                .checklist
                .daily_limit_respected
        );
        // 4.5 + 0.5 = 5.0 <= 5 -> still respected, the boundary is inclusive.
        assert!(
            scorer
                .evaluate(&answers(true), dec!(4.5))
                .checklist
                .daily_limit_respected
        );
        // 5.0 + 0.5 = 5.5 > 5 -> violated.
        let card = scorer.evaluate(&answers(true), dec!(5.0));
        assert!(!card.checklist.daily_limit_respected);
        // Five of six rules: round(100 * 5 / 6) = 83.
        assert_eq!(card.score, 83);
    }

    #[test]
    fn daily_count_weighs_opens_and_closes_at_half() {
        let trades = vec![
            trade_on(12, TradeStatus::Closed),
            trade_on(12, TradeStatus::Open),
            // A different day, never counted.
            trade_on(13, TradeStatus::Closed),
        ];
        let day = chrono::NaiveDate::from_ymd_opt(2024, 3, 12).unwrap();
        assert_eq!(daily_trade_count(&trades, day), dec!(1.5));
    }

    #[test]
    fn non_positive_daily_limit_is_rejected() {
        assert!(DisciplineScorer::new(settings(Decimal::ZERO)).is_err());
    }
}
