use axum::{
    Json,
    extract::rejection::JsonRejection,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::fuel_logs::use_cases::errors::ApplicationError;
use crate::modules::fuel_logs::use_cases::record_fuel_log::command::RecordFuelLog;
use crate::shell::state::AppState;

fn full_tank_by_default() -> bool {
    true
}

#[derive(Deserialize)]
pub struct RecordFuelLogBody {
    pub odometer: u64,
    pub volume: Decimal,
    pub unit_price: Decimal,
    #[serde(default = "full_tank_by_default")]
    pub is_full_tank: bool,
    pub timestamp: Option<DateTime<Utc>>,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(vehicle_id): Path<String>,
    body: Result<Json<RecordFuelLogBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = RecordFuelLog {
        log_id: Uuid::now_v7().to_string(),
        vehicle_id,
        odometer: body.odometer,
        volume: body.volume,
        unit_price: body.unit_price,
        is_full_tank: body.is_full_tank,
        timestamp: body.timestamp.unwrap_or_else(Utc::now),
    };

    match state.record_handler.handle(command).await {
        Ok(recorded) => (StatusCode::CREATED, Json(recorded)).into_response(),
        Err(ApplicationError::Domain(_)) => StatusCode::CONFLICT.into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
