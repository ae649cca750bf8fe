// Shared test fixtures for fuel log entries and their recorded events.

use crate::modules::fuel_logs::core::events::FuelLogEvent;
use crate::modules::fuel_logs::core::events::v1::fuel_log_recorded::FuelLogRecordedV1;
use crate::modules::fuel_logs::core::fuel_log::FuelLogEntry;
use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use std::str::FromStr;

pub struct LogEntryBuilder {
    inner: FuelLogEntry,
}

impl Default for LogEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl LogEntryBuilder {
    pub fn new() -> Self {
        Self {
            inner: FuelLogEntry {
                log_id: "log-fixed-0001".to_string(),
                vehicle_id: "vehicle-fixed-0001".to_string(),
                odometer: 1_000,
                volume: Decimal::from(40),
                unit_price: Decimal::from_str("1.50").unwrap(),
                is_full_tank: true,
                timestamp: Utc.with_ymd_and_hms(2024, 3, 15, 8, 0, 0).unwrap(),
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

    pub fn partial(mut self) -> Self {
        self.inner.is_full_tank = false;
        self
    }

    pub fn timestamp(mut self, v: DateTime<Utc>) -> Self {
        self.inner.timestamp = v;
        self
    }

    /// Noon UTC on the given day.
    pub fn on(mut self, year: i32, month: u32, day: u32) -> Self {
        self.inner.timestamp = Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap();
        self
    }

    pub fn build(self) -> FuelLogEntry {
        self.inner
    }

    pub fn build_event(self) -> FuelLogEvent {
        let entry = self.inner;
        FuelLogEvent::FuelLogRecordedV1(FuelLogRecordedV1 {
            log_id: entry.log_id,
            vehicle_id: entry.vehicle_id,
            odometer: entry.odometer,
            volume: entry.volume,
            unit_price: entry.unit_price,
            is_full_tank: entry.is_full_tank,
            timestamp: entry.timestamp,
        })
    }
}

pub fn full(odometer: u64, volume: &str) -> FuelLogEntry {
    LogEntryBuilder::new()
        .log_id(format!("log-{odometer}"))
        .odometer(odometer)
        .volume(volume)
        .build()
}

pub fn partial(odometer: u64, volume: &str) -> FuelLogEntry {
    LogEntryBuilder::new()
        .log_id(format!("log-{odometer}"))
        .odometer(odometer)
        .volume(volume)
        .partial()
        .build()
}

#[cfg(test)]
mod log_entry_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn setters_override_the_defaults() {
        let entry = LogEntryBuilder::new()
            .log_id("log-x")
            .vehicle_id("car-1")
            .odometer(42)
            .volume("12.5")
            .unit_price("1.9")
            .partial()
            .on(2023, 12, 31)
            .build();
        assert_eq!(entry.log_id, "log-x");
        assert_eq!(entry.vehicle_id, "car-1");
        assert_eq!(entry.odometer, 42);
        assert_eq!(entry.volume.to_string(), "12.5");
        assert!(!entry.is_full_tank);
        assert_eq!(entry.timestamp.to_rfc3339(), "2023-12-31T12:00:00+00:00");
    }

    #[rstest]
    fn the_event_carries_the_same_fields() {
        let entry = LogEntryBuilder::new().odometer(7).build();
        let FuelLogEvent::FuelLogRecordedV1(event) =
            LogEntryBuilder::new().odometer(7).build_event();
        assert_eq!(FuelLogEntry::from(event), entry);
    }
}
