use crate::modules::fuel_logs::core::events::FuelLogEvent;
use crate::modules::fuel_logs::core::insights::{VehicleInsights, compute_insights};
use crate::modules::fuel_logs::core::series::SeriesWindow;
use crate::modules::fuel_logs::use_cases::errors::ApplicationError;
use crate::modules::fuel_logs::use_cases::snapshot::load_snapshot;
use crate::shared::core::clock::Clock;
use crate::shared::infrastructure::log_store::LogStore;
use std::sync::Arc;

pub struct VehicleInsightsHandler<TStore>
where
    TStore: LogStore<FuelLogEvent> + Send + Sync + 'static,
{
    store: Arc<TStore>,
    clock: Arc<dyn Clock>,
    window: SeriesWindow,
}

impl<TStore> VehicleInsightsHandler<TStore>
where
    TStore: LogStore<FuelLogEvent> + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>, clock: Arc<dyn Clock>, window: SeriesWindow) -> Self {
        Self {
            store,
            clock,
            window,
        }
    }

    pub async fn insights(&self, vehicle_id: &str) -> Result<VehicleInsights, ApplicationError> {
        let snapshot = load_snapshot(&*self.store, vehicle_id).await?;
        let insights = compute_insights(&snapshot.state.entries, self.clock.now(), self.window);
        tracing::debug!(
            stream_id = %snapshot.stream_id,
            entries = insights.entry_count,
            efficiency = %insights.efficiency,
            "vehicle insights computed"
        );
        Ok(insights)
    }
}
