use axum::{extract::State, http::StatusCode, response::Json};

use crate::routes::AppState;

pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<serde_json::Value>) {
    let cached_days = state.loader.cache().len().await;
    (
        StatusCode::OK,
        Json(serde_json::json!({ "status": "ok", "cachedDays": cached_days })),
    )
}
