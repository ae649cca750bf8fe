use async_graphql::{Context, ID, Object, Result as GqlResult, SimpleObject};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::modules::fuel_logs::use_cases::record_fuel_log::command::RecordFuelLog;
use crate::modules::fuel_logs::use_cases::record_fuel_log::handler::RecordedFuelLog;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlRecordedFuelLog {
    pub log_id: ID,
    pub odometer: u64,
    pub efficiency: Decimal,
}

impl From<RecordedFuelLog> for GqlRecordedFuelLog {
    fn from(r: RecordedFuelLog) -> Self {
        Self {
            log_id: ID(r.log_id),
            odometer: r.odometer,
            efficiency: r.efficiency,
        }
    }
}

#[derive(Default)]
pub struct RecordFuelLogMutation;

#[Object]
impl RecordFuelLogMutation {
    #[allow(clippy::too_many_arguments)]
    async fn record_fuel_log(
        &self,
        context: &Context<'_>,
        vehicle_id: String,
        odometer: u64,
        volume: Decimal,
        unit_price: Decimal,
        is_full_tank: Option<bool>,
        timestamp: Option<DateTime<Utc>>,
    ) -> GqlResult<GqlRecordedFuelLog> {
        let state = context.data_unchecked::<AppState>();

        let command = RecordFuelLog {
            log_id: Uuid::now_v7().to_string(),
            vehicle_id,
            odometer,
            volume,
            unit_price,
            is_full_tank: is_full_tank.unwrap_or(true),
            timestamp: timestamp.unwrap_or_else(Utc::now),
        };

        let recorded = state
            .record_handler
            .handle(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(recorded.into())
    }
}
