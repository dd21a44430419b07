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
pub struct UserDeleteQuery {
    pub user_id: Option<String>,
}

/// DELETE /userdelete?user_id=<string> - remove a user row
pub async fn user_delete(
    State(state): State<AppState>,
    Query(query): Query<UserDeleteQuery>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let user_id = match query.user_id.as_deref() {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => return Err(ApiError::bad_request("query parameter 'user_id' is required")),
    };

    Ok(match state.users.delete(&user_id).await? {
        DeleteOutcome::Deleted => (
            StatusCode::OK,
            Json(json!({"user_id": user_id, "status": "deleted"})),
        ),
        DeleteOutcome::NotFound => (
            StatusCode::NOT_FOUND,
            Json(json!({"user_id": user_id, "status": "not_found"})),
        ),
    })
}
