use crate::modules::fuel_logs::core::events::FuelLogEvent;
use crate::modules::fuel_logs::core::evolve::evolve;
use crate::modules::fuel_logs::core::fuel_log::stream_id;
use crate::modules::fuel_logs::core::state::FuelLogState;
use crate::shared::infrastructure::log_store::{LogStore, LogStoreError};

/// A folded vehicle log together with the stream version it was read at.
pub struct Snapshot {
    pub stream_id: String,
    pub state: FuelLogState,
    pub version: i64,
}

/// Reads the vehicle's stream and folds it from scratch. Every query and command starts
/// here; nothing is cached between calls.
pub async fn load_snapshot<TStore>(
    store: &TStore,
    vehicle_id: &str,
) -> Result<Snapshot, LogStoreError>
where
    TStore: LogStore<FuelLogEvent> + ?Sized,
{
    let stream_id = stream_id(vehicle_id);
    let loaded = store.load(&stream_id).await?;
    let state = loaded
        .records
        .into_iter()
        .fold(FuelLogState::default(), evolve);
    Ok(Snapshot {
        stream_id,
        state,
        version: loaded.version,
    })
}
