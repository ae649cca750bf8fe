use async_graphql::{EmptySubscription, MergedObject, Schema};

use crate::modules::fuel_logs::use_cases::list_fuel_logs::inbound::graphql::FuelLogsQuery;
use crate::modules::fuel_logs::use_cases::record_fuel_log::inbound::graphql::RecordFuelLogMutation;
use crate::modules::fuel_logs::use_cases::vehicle_insights::inbound::graphql::VehicleInsightsQuery;
pub use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(VehicleInsightsQuery, FuelLogsQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(RecordFuelLogMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}
