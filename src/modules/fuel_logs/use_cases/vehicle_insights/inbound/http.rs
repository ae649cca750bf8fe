use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(vehicle_id): Path<String>,
) -> impl IntoResponse {
    match state.insights_handler.insights(&vehicle_id).await {
        Ok(insights) => (StatusCode::OK, Json(insights)).into_response(),
        Err(e) => {
            tracing::warn!(%vehicle_id, error = %e, "vehicle insights failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
