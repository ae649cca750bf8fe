// Calendar-month views over a vehicle's log, relative to an injected "now".
//
// Purpose
// - monthly_spending: trailing months ending at the month containing now, each valued at the
//   cost of the fills recorded in that month. Empty months are present with zero.
// - efficiency_trend: trailing months where each point is the average efficiency over every
//   entry up to the end of that month (a cumulative snapshot, not a per-month figure).
// - trend_percentage: month-over-month change between the efficiency over all entries and the
//   efficiency over entries recorded before the current month started.
//
// Notes
// - Months are UTC calendar months.
// - A trend of zero also covers "no baseline last month". It is a policy, not "no change".

use crate::modules::fuel_logs::core::efficiency::average_efficiency;
use crate::modules::fuel_logs::core::fuel_log::FuelLogEntry;
use chrono::{DateTime, Datelike, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

const MONTH_LABELS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct CalendarMonth {
    pub year: i32,
    /// 1-based.
    pub month: u32,
}

impl CalendarMonth {
    pub fn containing(instant: DateTime<Utc>) -> Self {
        Self {
            year: instant.year(),
            month: instant.month(),
        }
    }

    pub fn previous(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    pub fn label(self) -> &'static str {
        MONTH_LABELS[(self.month.clamp(1, 12) - 1) as usize]
    }

    /// `count` consecutive months ending at `last`, oldest first.
    pub fn trailing(last: Self, count: usize) -> Vec<Self> {
        let mut months: Vec<Self> = std::iter::successors(Some(last), |m| Some(m.previous()))
            .take(count)
            .collect();
        months.reverse();
        months
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyBucket {
    pub label: &'static str,
    pub year: i32,
    pub month: u32,
    pub value: Decimal,
    pub active: bool,
}

impl MonthlyBucket {
    fn new(month: CalendarMonth, value: Decimal, active: bool) -> Self {
        Self {
            label: month.label(),
            year: month.year,
            month: month.month,
            value,
            active,
        }
    }
}

/// How many trailing months each series covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesWindow {
    pub spending_months: usize,
    pub trend_months: usize,
}

impl Default for SeriesWindow {
    fn default() -> Self {
        Self {
            spending_months: 4,
            trend_months: 6,
        }
    }
}

pub fn monthly_spending(
    entries: &[FuelLogEntry],
    now: DateTime<Utc>,
    months: usize,
) -> Vec<MonthlyBucket> {
    let current = CalendarMonth::containing(now);
    CalendarMonth::trailing(current, months)
        .into_iter()
        .map(|month| {
            let spent = entries
                .iter()
                .filter(|entry| CalendarMonth::containing(entry.timestamp) == month)
                .fold(Decimal::ZERO, |total, entry| total.saturating_add(entry.cost()));
            MonthlyBucket::new(month, spent, month == current)
        })
        .collect()
}

pub fn efficiency_trend(
    entries: &[FuelLogEntry],
    now: DateTime<Utc>,
    months: usize,
) -> Vec<MonthlyBucket> {
    let current = CalendarMonth::containing(now);
    CalendarMonth::trailing(current, months)
        .into_iter()
        .map(|month| {
            let efficiency = average_efficiency(
                entries
                    .iter()
                    .filter(|entry| CalendarMonth::containing(entry.timestamp) <= month),
            );
            MonthlyBucket::new(month, efficiency, month == current)
        })
        .collect()
}

/// Percentage change, rounded to 1 decimal place, of the current efficiency against the
/// efficiency as it stood before the current month.
pub fn trend_percentage(entries: &[FuelLogEntry], now: DateTime<Utc>) -> Decimal {
    let current_month = CalendarMonth::containing(now);
    let current_efficiency = average_efficiency(entries);
    let last_month_efficiency = average_efficiency(
        entries
            .iter()
            .filter(|entry| CalendarMonth::containing(entry.timestamp) < current_month),
    );

    if last_month_efficiency.is_zero() {
        return Decimal::ZERO;
    }

    (current_efficiency - last_month_efficiency)
        .checked_div(last_month_efficiency)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .map(|percent| percent.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero))
        .unwrap_or(Decimal::ZERO)
}
