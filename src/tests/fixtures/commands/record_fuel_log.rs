// Shared test fixture for the RecordFuelLog command.

use crate::modules::fuel_logs::use_cases::record_fuel_log::command::RecordFuelLog;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::fs;
use std::str::FromStr;

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct RecordFuelLogDto {
    pub log_id: String,
    pub vehicle_id: String,
    pub odometer: u64,
    pub volume: Decimal,
    pub unit_price: Decimal,
    pub is_full_tank: bool,
    pub timestamp: DateTime<Utc>,
}

pub struct RecordFuelLogBuilder {
    inner: RecordFuelLog,
}

impl Default for RecordFuelLogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl RecordFuelLogBuilder {
    pub fn new() -> Self {
        let json_str =
            fs::read_to_string("./src/tests/fixtures/commands/json/record_fuel_log.json").unwrap();
        let dto: RecordFuelLogDto = serde_json::from_str(&json_str).unwrap();

        Self {
            inner: RecordFuelLog {
                log_id: dto.log_id,
                vehicle_id: dto.vehicle_id,
                odometer: dto.odometer,
                volume: dto.volume,
                unit_price: dto.unit_price,
                is_full_tank: dto.is_full_tank,
                timestamp: dto.timestamp,
            },
        }
    }

    pub fn log_id(mut self, v: impl Into<String>) -> Self {
        self.inner.log_id = v.into();
        self
    }

    pub fn vehicle_id(mut self, v: impl Into<String>) -> Self {
        self.inner.vehicle_id = v.into();
        self
    }

    pub fn odometer(mut self, v: u64) -> Self {
        self.inner.odometer = v;
        self
    }

    pub fn volume(mut self, v: &str) -> Self {
        self.inner.volume = Decimal::from_str(v).unwrap();
        self
    }

    pub fn unit_price(mut self, v: &str) -> Self {
        self.inner.unit_price = Decimal::from_str(v).unwrap();
        self
    }

    pub fn is_full_tank(mut self, v: bool) -> Self {
        self.inner.is_full_tank = v;
        self
    }

    pub fn timestamp(mut self, v: DateTime<Utc>) -> Self {
        self.inner.timestamp = v;
        self
    }

    pub fn build(self) -> RecordFuelLog {
        self.inner
    }
}

#[cfg(test)]
mod record_fuel_log_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = RecordFuelLogBuilder::default().build();
        assert_eq!(built.log_id, "log-fixed-0001");
        assert_eq!(built.vehicle_id, "vehicle-fixed-0001");
        assert_eq!(built.odometer, 12_500);
        assert_eq!(built.volume, Decimal::from_str("42.5").unwrap());
        assert_eq!(built.unit_price, Decimal::from_str("1.25").unwrap());
        assert!(built.is_full_tank);
        assert_eq!(built.timestamp.to_rfc3339(), "2024-03-15T08:30:00+00:00");
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = RecordFuelLogBuilder::new()
            .log_id("log-123")
            .vehicle_id("car-9")
            .odometer(99)
            .volume("1.5")
            .unit_price("2.5")
            .is_full_tank(false)
            .build();
        assert_eq!(custom.log_id, "log-123");
        assert_eq!(custom.vehicle_id, "car-9");
        assert_eq!(custom.odometer, 99);
        assert_eq!(custom.volume.to_string(), "1.5");
        assert_eq!(custom.unit_price.to_string(), "2.5");
        assert!(!custom.is_full_tank);
    }
}
