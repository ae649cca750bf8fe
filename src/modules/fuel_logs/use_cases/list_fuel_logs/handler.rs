use crate::modules::fuel_logs::core::events::FuelLogEvent;
use crate::modules::fuel_logs::use_cases::errors::ApplicationError;
use crate::modules::fuel_logs::use_cases::list_fuel_logs::view::FuelLogView;
use crate::modules::fuel_logs::use_cases::snapshot::load_snapshot;
use crate::shared::infrastructure::log_store::LogStore;
use std::cmp::Reverse;
use std::sync::Arc;

pub struct ListFuelLogsHandler<TStore>
where
    TStore: LogStore<FuelLogEvent> + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> ListFuelLogsHandler<TStore>
where
    TStore: LogStore<FuelLogEvent> + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// Newest first; entries sharing a timestamp list the higher odometer first.
    pub async fn list(&self, vehicle_id: &str) -> Result<Vec<FuelLogView>, ApplicationError> {
        let snapshot = load_snapshot(&*self.store, vehicle_id).await?;
        let mut views: Vec<FuelLogView> = snapshot
            .state
            .entries
            .into_iter()
            .map(FuelLogView::from)
            .collect();
        views.sort_by_key(|view| (Reverse(view.timestamp), Reverse(view.odometer)));
        tracing::debug!(stream_id = %snapshot.stream_id, count = views.len(), "fuel logs listed");
        Ok(views)
    }
}
