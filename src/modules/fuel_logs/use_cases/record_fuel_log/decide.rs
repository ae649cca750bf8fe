// Pure decision function for recording a fuel log.
//
// Responsibilities
// - Enforce submission rules: positive odometer, volume and price, and an odometer strictly
//   above the vehicle's last recorded reading.
// - Emit FuelLogRecordedV1 on success.
// - Never perform input or output.

use crate::modules::fuel_logs::core::events::FuelLogEvent;
use crate::modules::fuel_logs::core::events::v1::fuel_log_recorded::FuelLogRecordedV1;
use crate::modules::fuel_logs::core::state::FuelLogState;
use crate::modules::fuel_logs::use_cases::record_fuel_log::command::RecordFuelLog;
use rust_decimal::Decimal;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("odometer reading must be greater than 0")]
    NonPositiveOdometer,

    #[error("volume must be greater than 0")]
    NonPositiveVolume,

    #[error("price per unit must be greater than 0")]
    NonPositivePrice,

    #[error("odometer reading {given} must be greater than the last recorded reading {last}")]
    OdometerNotIncreasing { last: u64, given: u64 },
}

pub fn decide_record(
    state: &FuelLogState,
    command: RecordFuelLog,
) -> Result<Vec<FuelLogEvent>, DecideError> {
    if command.odometer == 0 {
        return Err(DecideError::NonPositiveOdometer);
    }
    if command.volume <= Decimal::ZERO {
        return Err(DecideError::NonPositiveVolume);
    }
    if command.unit_price <= Decimal::ZERO {
        return Err(DecideError::NonPositivePrice);
    }
    if let Some(last) = state.last_odometer
        && command.odometer <= last
    {
        return Err(DecideError::OdometerNotIncreasing {
            last,
            given: command.odometer,
        });
    }

    Ok(vec![FuelLogEvent::FuelLogRecordedV1(FuelLogRecordedV1 {
        log_id: command.log_id,
        vehicle_id: command.vehicle_id,
        odometer: command.odometer,
        volume: command.volume,
        unit_price: command.unit_price,
        is_full_tank: command.is_full_tank,
        timestamp: command.timestamp,
    })])
}
