use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::{json, Value};

use crate::api::extract;
use crate::database::models::Masterclass;
use crate::database::InsertOutcome;
use crate::error::ApiError;

use super::DUPLICATE_ID_MESSAGE;
use crate::handlers::AppState;

/// POST /mcadd - insert one catalog entry
pub async fn mc_add(
    State(state): State<AppState>,
    body: String,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let payload = extract::parse_object_body(&body)?;
    let mc = Masterclass::from_payload(&payload)?;

    let outcome = state.catalog.insert(&mc).await?;

    Ok(match outcome {
        InsertOutcome::Created => (
            StatusCode::CREATED,
            Json(json!({
                "id": mc.id,
                "title": mc.title,
                "status": "created"
            })),
        ),
        InsertOutcome::Duplicate => (
            StatusCode::CONFLICT,
            Json(json!({
                "id": mc.id,
                "title": mc.title,
                "status": "duplicate",
                "message": DUPLICATE_ID_MESSAGE
            })),
        ),
    })
}
