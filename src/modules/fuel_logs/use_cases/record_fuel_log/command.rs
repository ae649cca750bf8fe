// Command data type for recording a refuelling event.
//
// Responsibilities
// - Carry input data for the decider to validate and convert into an event.
// - Be independent of transport layer details (not tied to HTTP or GraphQL).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFuelLog {
    pub log_id: String,
    pub vehicle_id: String,
    pub odometer: u64,
    pub volume: Decimal,
    pub unit_price: Decimal,
    pub is_full_tank: bool,
    pub timestamp: DateTime<Utc>,
}
