use crate::modules::fuel_logs::core::events::FuelLogEvent;
use crate::modules::fuel_logs::core::state::FuelLogState;

pub fn evolve(mut state: FuelLogState, event: FuelLogEvent) -> FuelLogState {
    match event {
        FuelLogEvent::FuelLogRecordedV1(recorded) => {
            state.last_odometer = Some(
                state
                    .last_odometer
                    .map_or(recorded.odometer, |last| last.max(recorded.odometer)),
            );
            state.entries.push(recorded.into());
            state
        }
    }
}
