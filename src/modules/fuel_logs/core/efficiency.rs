// Average fuel efficiency (distance per unit of fuel) over anchored full-tank intervals.
//
// Purpose
// - Only a span that starts and ends on a full tank has a known fuel consumption: everything
//   added after the opening full tank, up to and including the closing one, was burnt over
//   that span. Partial fills inside the span count toward its fuel.
//
// Rules
// - Input order is irrelevant. Entries are stably sorted by odometer before scanning.
// - Every full tank becomes the new anchor, whether or not it closed an interval.
// - An interval contributes only when both its distance and its fuel are positive.
// - Fewer than two entries, or no contributing interval, yields zero.
//
// Boundaries
// - Pure. No validation of entries; malformed data degrades to zero instead of failing.

use crate::modules::fuel_logs::core::fuel_log::FuelLogEntry;
use rust_decimal::{Decimal, RoundingStrategy};

/// The odometer span between two consecutive full tanks, and the fuel added over it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FuelInterval {
    pub start_odometer: u64,
    pub end_odometer: u64,
    pub distance: Decimal,
    pub fuel: Decimal,
}

pub fn closed_intervals<'a>(
    entries: impl IntoIterator<Item = &'a FuelLogEntry>,
) -> Vec<FuelInterval> {
    let mut sorted: Vec<&FuelLogEntry> = entries.into_iter().collect();
    sorted.sort_by_key(|entry| entry.odometer);

    let mut intervals = Vec::new();
    let mut anchor: Option<u64> = None;
    let mut fuel_since_anchor = Decimal::ZERO;

    for entry in sorted {
        fuel_since_anchor = fuel_since_anchor.saturating_add(entry.volume);
        if !entry.is_full_tank {
            continue;
        }
        if let Some(start_odometer) = anchor {
            let distance = Decimal::from(entry.odometer.saturating_sub(start_odometer));
            if distance > Decimal::ZERO && fuel_since_anchor > Decimal::ZERO {
                intervals.push(FuelInterval {
                    start_odometer,
                    end_odometer: entry.odometer,
                    distance,
                    fuel: fuel_since_anchor,
                });
            }
        }
        anchor = Some(entry.odometer);
        fuel_since_anchor = Decimal::ZERO;
    }

    intervals
}

/// Total anchored distance over total anchored fuel, rounded to 2 decimal places.
pub fn average_efficiency<'a>(entries: impl IntoIterator<Item = &'a FuelLogEntry>) -> Decimal {
    let entries: Vec<&FuelLogEntry> = entries.into_iter().collect();
    if entries.len() < 2 {
        return Decimal::ZERO;
    }

    let (total_distance, total_fuel) = closed_intervals(entries).iter().fold(
        (Decimal::ZERO, Decimal::ZERO),
        |(distance, fuel), interval| {
            (
                distance.saturating_add(interval.distance),
                fuel.saturating_add(interval.fuel),
            )
        },
    );

    if total_distance.is_zero() || total_fuel.is_zero() {
        return Decimal::ZERO;
    }

    total_distance
        .checked_div(total_fuel)
        .map(|efficiency| {
            efficiency.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        })
        .unwrap_or(Decimal::ZERO)
}
