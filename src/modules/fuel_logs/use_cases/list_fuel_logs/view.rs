use crate::modules::fuel_logs::core::fuel_log::FuelLogEntry;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

/// One row of a vehicle's fuel history, with its cost already multiplied out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FuelLogView {
    pub log_id: String,
    pub vehicle_id: String,
    pub odometer: u64,
    pub volume: Decimal,
    pub unit_price: Decimal,
    pub cost: Decimal,
    pub is_full_tank: bool,
    pub timestamp: DateTime<Utc>,
}

impl From<FuelLogEntry> for FuelLogView {
    fn from(entry: FuelLogEntry) -> Self {
        Self {
            cost: entry.cost(),
            log_id: entry.log_id,
            vehicle_id: entry.vehicle_id,
            odometer: entry.odometer,
            volume: entry.volume,
            unit_price: entry.unit_price,
            is_full_tank: entry.is_full_tank,
            timestamp: entry.timestamp,
        }
    }
}
