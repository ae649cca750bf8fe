use crate::modules::fuel_logs::core::efficiency::average_efficiency;
use crate::modules::fuel_logs::core::events::FuelLogEvent;
use crate::modules::fuel_logs::core::evolve::evolve;
use crate::modules::fuel_logs::use_cases::errors::ApplicationError;
use crate::modules::fuel_logs::use_cases::record_fuel_log::command::RecordFuelLog;
use crate::modules::fuel_logs::use_cases::record_fuel_log::decide::decide_record;
use crate::modules::fuel_logs::use_cases::snapshot::load_snapshot;
use crate::shared::infrastructure::log_store::LogStore;
use rust_decimal::Decimal;
use serde::Serialize;
use std::sync::Arc;

/// What the caller learns after a successful submission: the vehicle's new odometer and
/// its average efficiency recomputed over the log including the new entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordedFuelLog {
    pub log_id: String,
    pub odometer: u64,
    pub efficiency: Decimal,
}

pub struct RecordFuelLogHandler<TStore>
where
    TStore: LogStore<FuelLogEvent> + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> RecordFuelLogHandler<TStore>
where
    TStore: LogStore<FuelLogEvent> + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        command: RecordFuelLog,
    ) -> Result<RecordedFuelLog, ApplicationError> {
        let snapshot = load_snapshot(&*self.store, &command.vehicle_id).await?;
        let log_id = command.log_id.clone();
        let odometer = command.odometer;

        let events = decide_record(&snapshot.state, command).inspect_err(|reason| {
            tracing::warn!(stream_id = %snapshot.stream_id, %reason, "fuel log rejected");
        })?;

        self.store
            .append(&snapshot.stream_id, snapshot.version, &events)
            .await?;

        let state = events.into_iter().fold(snapshot.state, evolve);
        let efficiency = average_efficiency(&state.entries);
        tracing::debug!(
            stream_id = %snapshot.stream_id,
            %log_id,
            odometer,
            %efficiency,
            "fuel log recorded"
        );

        Ok(RecordedFuelLog {
            log_id,
            odometer,
            efficiency,
        })
    }
}
