use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::fuel_logs::use_cases::list_fuel_logs::inbound::http as history_http;
use crate::modules::fuel_logs::use_cases::record_fuel_log::inbound::http as record_http;
use crate::modules::fuel_logs::use_cases::vehicle_insights::inbound::http as insights_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/vehicles/{vehicle_id}/fuel-logs",
            post(record_http::handle).get(history_http::handle),
        )
        .route("/vehicles/{vehicle_id}/insights", get(insights_http::handle))
        .with_state(state)
}
