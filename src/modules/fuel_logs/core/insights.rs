use crate::modules::fuel_logs::core::efficiency::average_efficiency;
use crate::modules::fuel_logs::core::fuel_log::FuelLogEntry;
use crate::modules::fuel_logs::core::series::{
    MonthlyBucket, SeriesWindow, efficiency_trend, monthly_spending, trend_percentage,
};
use crate::modules::fuel_logs::core::statistics::{LifetimeStatistics, lifetime_statistics};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

/// Everything the insights screen shows for one vehicle, computed from one log snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VehicleInsights {
    pub efficiency: Decimal,
    pub trend: Decimal,
    pub statistics: LifetimeStatistics,
    pub spending: Vec<MonthlyBucket>,
    pub efficiency_trend: Vec<MonthlyBucket>,
    pub entry_count: usize,
}

pub fn compute_insights(
    entries: &[FuelLogEntry],
    now: DateTime<Utc>,
    window: SeriesWindow,
) -> VehicleInsights {
    VehicleInsights {
        efficiency: average_efficiency(entries),
        trend: trend_percentage(entries, now),
        statistics: lifetime_statistics(entries),
        spending: monthly_spending(entries, now, window.spending_months),
        efficiency_trend: efficiency_trend(entries, now, window.trend_months),
        entry_count: entries.len(),
    }
}
