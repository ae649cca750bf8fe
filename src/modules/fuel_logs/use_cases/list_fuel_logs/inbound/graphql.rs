use async_graphql::{Context, ID, Object, Result as GqlResult, SimpleObject};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::modules::fuel_logs::use_cases::list_fuel_logs::view::FuelLogView;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlFuelLog {
    pub log_id: ID,
    pub vehicle_id: String,
    pub odometer: u64,
    pub volume: Decimal,
    pub unit_price: Decimal,
    pub cost: Decimal,
    pub is_full_tank: bool,
    pub timestamp: DateTime<Utc>,
}

impl From<FuelLogView> for GqlFuelLog {
    fn from(v: FuelLogView) -> Self {
        Self {
            log_id: ID(v.log_id),
            vehicle_id: v.vehicle_id,
            odometer: v.odometer,
            volume: v.volume,
            unit_price: v.unit_price,
            cost: v.cost,
            is_full_tank: v.is_full_tank,
            timestamp: v.timestamp,
        }
    }
}

#[derive(Default)]
pub struct FuelLogsQuery;

#[Object]
impl FuelLogsQuery {
    async fn fuel_logs(
        &self,
        context: &Context<'_>,
        vehicle_id: String,
    ) -> GqlResult<Vec<GqlFuelLog>> {
        let state = context.data_unchecked::<AppState>();
        let views = state
            .history_handler
            .list(&vehicle_id)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(views.into_iter().map(GqlFuelLog::from).collect())
    }
}
