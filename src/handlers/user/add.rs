use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::{json, Value};

use crate::api::extract;
use crate::database::models::UserRequestRecord;
use crate::database::InsertOutcome;
use crate::error::ApiError;
use crate::handlers::AppState;

/// POST /useradd - register a user with an optional initial request counter
pub async fn user_add(
    State(state): State<AppState>,
    body: String,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let payload = extract::parse_object_body(&body)?;
    let user = UserRequestRecord::from_payload(&payload)?;

    let outcome = state.users.insert(&user).await?;

    Ok(match outcome {
        InsertOutcome::Created => (
            StatusCode::CREATED,
            Json(json!({
                "user_id": user.user_id,
                "request_count": user.request_count,
                "phone": user.phone,
                "full_name": user.full_name,
                "telegram_nick": user.telegram_nick,
                "status": "created"
            })),
        ),
        InsertOutcome::Duplicate => (
            StatusCode::CONFLICT,
            Json(json!({
                "user_id": user.user_id,
                "request_count": user.request_count,
                "phone": user.phone,
                "full_name": user.full_name,
                "telegram_nick": user.telegram_nick,
                "status": "duplicate",
                "message": "user already exists"
            })),
        ),
    })
}
