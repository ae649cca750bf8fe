use crate::modules::fuel_logs::core::events::FuelLogEvent;
use crate::modules::fuel_logs::core::series::SeriesWindow;
use crate::modules::fuel_logs::use_cases::list_fuel_logs::handler::ListFuelLogsHandler;
use crate::modules::fuel_logs::use_cases::record_fuel_log::handler::RecordFuelLogHandler;
use crate::modules::fuel_logs::use_cases::vehicle_insights::handler::VehicleInsightsHandler;
use crate::shared::core::clock::Clock;
use crate::shared::infrastructure::log_store::in_memory::InMemoryLogStore;
use std::sync::Arc;

pub type FuelLogStore = InMemoryLogStore<FuelLogEvent>;

#[derive(Clone)]
pub struct AppState {
    pub record_handler: Arc<RecordFuelLogHandler<FuelLogStore>>,
    pub insights_handler: Arc<VehicleInsightsHandler<FuelLogStore>>,
    pub history_handler: Arc<ListFuelLogsHandler<FuelLogStore>>,
}

impl AppState {
    /// Wires every handler onto one shared log store.
    pub fn new(store: Arc<FuelLogStore>, clock: Arc<dyn Clock>, window: SeriesWindow) -> Self {
        Self {
            record_handler: Arc::new(RecordFuelLogHandler::new(store.clone())),
            insights_handler: Arc::new(VehicleInsightsHandler::new(store.clone(), clock, window)),
            history_handler: Arc::new(ListFuelLogsHandler::new(store)),
        }
    }
}
