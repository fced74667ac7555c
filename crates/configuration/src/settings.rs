use core_types::UserSettings;
use rust_decimal::Decimal;
use serde::Deserialize;

/// The root configuration structure for the application.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub defaults: TradeDefaults,
}

/// Default trading parameters applied to a newly created profile.
///
/// These seed a profile's `UserSettings`; each trader can change them
/// afterwards through the settings screen.
#[derive(Debug, Clone, Deserialize)]
pub struct TradeDefaults {
    /// Default profit target as a fraction of entry (0.5 means +50%).
    pub profit_target_pct: Decimal,
    /// Default stop-loss as a fraction of entry.
    pub stop_loss_pct: Decimal,
    /// Maximum trades per calendar day. Fractional: an open and its matching
    /// close each consume 0.5.
    pub max_trades_per_day: Decimal,
    /// Maximum risk per trade as a fraction of current balance.
    pub max_risk_per_trade_pct: Decimal,
}

impl TradeDefaults {
    /// Converts the loaded defaults into a profile's `UserSettings`.
    pub fn to_settings(&self) -> UserSettings {
        UserSettings {
            default_profit_target_pct: self.profit_target_pct,
            default_stop_loss_pct: self.stop_loss_pct,
            max_trades_per_day: self.max_trades_per_day,
            max_risk_per_trade_pct: self.max_risk_per_trade_pct,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn defaults_convert_into_valid_settings() {
        let defaults = TradeDefaults {
            profit_target_pct: dec!(0.5),
            stop_loss_pct: dec!(0.2),
            max_trades_per_day: dec!(5),
            max_risk_per_trade_pct: dec!(0.02),
        };
        let settings = defaults.to_settings();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.max_trades_per_day, dec!(5));
    }
}
