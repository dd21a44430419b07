use axum::{http::StatusCode, response::Json};
use serde_json::{json, Value};

use crate::database::manager::DatabaseManager;

const SERVICE_NAME: &str = "masterclass-api";

/// GET /ping - health probe. Reports degraded (503) when either store is
/// unreachable.
pub async fn ping() -> (StatusCode, Json<Value>) {
    let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();

    match DatabaseManager::health_check().await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "service": SERVICE_NAME,
                "timestamp": timestamp
            })),
        ),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "degraded",
                    "service": SERVICE_NAME,
                    "timestamp": timestamp
                })),
            )
        }
    }
}
