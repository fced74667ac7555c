use analytics::MetricsEngine;
use chrono::{DateTime, Utc};
use core_types::{ArchivedSession, UserProfile};
use rust_decimal::Decimal;
use tracing::info;

/// Closes out the current trading period and starts a new one.
///
/// The active ledger and capital are frozen into one `ArchivedSession`
/// prepended to the profile's archive history (newest first); then the ledger
/// is cleared, `initial_capital` is replaced with `new_capital`, and the new
/// period starts at `now`.
///
/// The whole transition happens in memory on the given profile, so from the
/// caller's perspective it is atomic: there is no observable state with the
/// archive written but the ledger not yet reset. Any finite `new_capital` is
/// accepted, lower or higher than the current balance.
pub fn archive_and_reset(profile: &mut UserProfile, new_capital: Decimal, now: DateTime<Utc>) {
    let total_pnl = MetricsEngine::new().calculate(&profile.trades).total_pnl;

    // Deep copy: the snapshot shares nothing with the ledger it freezes.
    let snapshot = ArchivedSession::new(
        profile.start_date,
        now,
        profile.initial_capital,
        total_pnl,
        profile.trades.clone(),
    );

    info!(
        archive_id = %snapshot.id(),
        trade_count = snapshot.trade_count(),
        %total_pnl,
        "trading period archived"
    );

    profile.archives.insert(0, snapshot);
    profile.trades.clear();
    profile.initial_capital = new_capital;
    profile.start_date = now;
}
