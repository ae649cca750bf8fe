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
    match state.history_handler.list(&vehicle_id).await {
        Ok(views) => (StatusCode::OK, Json(views)).into_response(),
        Err(e) => {
            tracing::warn!(%vehicle_id, error = %e, "fuel log history failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
