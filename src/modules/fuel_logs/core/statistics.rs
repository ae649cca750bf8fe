// Lifetime totals over every entry of a vehicle, full tank or not.
//
// Notes
// - total_distance is the odometer range (max minus min). It deliberately ignores full-tank
//   anchoring, so it diverges from the anchored distance behind average_efficiency whenever
//   the log starts or ends on a partial fill.
// - avg_consumption is total_distance / total_volume * 100, zero when no fuel was logged.

use crate::modules::fuel_logs::core::fuel_log::FuelLogEntry;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct LifetimeStatistics {
    pub total_distance: Decimal,
    pub total_volume: Decimal,
    pub total_spent: Decimal,
    pub avg_consumption: Decimal,
}

pub fn lifetime_statistics(entries: &[FuelLogEntry]) -> LifetimeStatistics {
    let Some(min_odometer) = entries.iter().map(|e| e.odometer).min() else {
        return LifetimeStatistics::default();
    };
    let max_odometer = entries.iter().map(|e| e.odometer).max().unwrap_or(min_odometer);

    let total_distance = Decimal::from(max_odometer.saturating_sub(min_odometer));
    let (total_volume, total_spent) = entries.iter().fold(
        (Decimal::ZERO, Decimal::ZERO),
        |(volume, spent), entry| {
            (
                volume.saturating_add(entry.volume),
                spent.saturating_add(entry.cost()),
            )
        },
    );

    let avg_consumption = if total_volume.is_zero() {
        Decimal::ZERO
    } else {
        total_distance
            .checked_div(total_volume)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .unwrap_or(Decimal::ZERO)
    };

    LifetimeStatistics {
        total_distance,
        total_volume,
        total_spent,
        avg_consumption,
    }
}
