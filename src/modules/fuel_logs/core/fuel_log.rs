// One refuelling event, as the analytics engine sees it.
//
// Notes
// - Entries are immutable. A correction is a new snapshot from the store, never an in-place edit.
// - `timestamp` drives month bucketing only. Efficiency ordering is by odometer.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuelLogEntry {
    pub log_id: String,
    pub vehicle_id: String,
    pub odometer: u64,
    pub volume: Decimal,
    pub unit_price: Decimal,
    pub is_full_tank: bool,
    pub timestamp: DateTime<Utc>,
}

impl FuelLogEntry {
    pub fn cost(&self) -> Decimal {
        self.volume.saturating_mul(self.unit_price)
    }
}

/// Log store stream holding every entry of one vehicle.
pub fn stream_id(vehicle_id: &str) -> String {
    format!("FuelLog-{vehicle_id}")
}
