// Event payload: FuelLogRecordedV1.
//
// Purpose
// - Record the business fact that a vehicle was refuelled. This is the immutable record the
//   log store keeps; every analytics figure is recomputed from these.
//
// Versioning and evolution
// - Prefer adding fields. For breaking changes, add FuelLogRecordedV2 and a new variant.

use crate::modules::fuel_logs::core::fuel_log::FuelLogEntry;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct FuelLogRecordedV1 {
    pub log_id: String,
    pub vehicle_id: String,
    pub odometer: u64,
    pub volume: Decimal,
    pub unit_price: Decimal,
    pub is_full_tank: bool,
    pub timestamp: DateTime<Utc>,
}

impl From<FuelLogRecordedV1> for FuelLogEntry {
    fn from(event: FuelLogRecordedV1) -> Self {
        Self {
            log_id: event.log_id,
            vehicle_id: event.vehicle_id,
            odometer: event.odometer,
            volume: event.volume,
            unit_price: event.unit_price,
            is_full_tank: event.is_full_tank,
            timestamp: event.timestamp,
        }
    }
}
