use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::database::DeleteOutcome;
use crate::error::ApiError;
use crate::handlers::AppState;

#[derive(Debug, Deserialize)]
pub struct DeleteQuery {
    pub id: Option<String>,
}

/// DELETE /mcdelete?id=<int> - remove one catalog entry by id
pub async fn mc_delete(
    State(state): State<AppState>,
    Query(query): Query<DeleteQuery>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let id = parse_id(query.id.as_deref())?;

    Ok(match state.catalog.delete(id).await? {
        DeleteOutcome::Deleted => (
            StatusCode::OK,
            Json(json!({"id": id, "status": "deleted"})),
        ),
        DeleteOutcome::NotFound => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "id": id,
                "status": "not_found",
                "message": "masterclass with this id does not exist"
            })),
        ),
    })
}

fn parse_id(raw: Option<&str>) -> Result<i64, ApiError> {
    let raw = raw.unwrap_or("");
    if raw.is_empty() {
        return Err(ApiError::bad_request("query parameter 'id' is required"));
    }
    raw.parse::<i64>()
        .map_err(|e| ApiError::bad_request(format!("invalid 'id' parameter: {}", e)))
}
