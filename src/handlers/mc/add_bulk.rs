use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::{json, Value};

use crate::api::extract;
use crate::database::models::Masterclass;
use crate::database::InsertOutcome;
use crate::error::ApiError;

use super::DUPLICATE_ID_MESSAGE;
use crate::handlers::AppState;

/// POST /mcaddbulk - insert a batch of catalog entries.
///
/// Items are inserted independently and in input order; the loop is not
/// wrapped in a transaction, so one duplicate never rolls back the rest.
pub async fn mc_add_bulk(
    State(state): State<AppState>,
    body: String,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let raw_items = extract::parse_array_body(&body)?;

    let mut items = Vec::with_capacity(raw_items.len());
    for (index, item) in raw_items.iter().enumerate() {
        items.push(Masterclass::from_payload(item).map_err(|e| for_item(e, index))?);
    }

    let mut inserted = 0usize;
    let mut results = Vec::with_capacity(items.len());
    for item in &items {
        match state.catalog.insert(item).await? {
            InsertOutcome::Created => {
                inserted += 1;
                results.push(json!({"id": item.id, "status": "created"}));
            }
            InsertOutcome::Duplicate => {
                results.push(json!({
                    "id": item.id,
                    "status": "duplicate",
                    "message": DUPLICATE_ID_MESSAGE
                }));
            }
        }
    }

    let requested = items.len();
    let duplicates = requested - inserted;
    let (code, status) = if inserted == 0 {
        (StatusCode::CONFLICT, "duplicates")
    } else if inserted == requested {
        (StatusCode::CREATED, "created")
    } else {
        (StatusCode::MULTI_STATUS, "partial")
    };

    Ok((
        code,
        Json(json!({
            "requested": requested,
            "inserted": inserted,
            "duplicates": duplicates,
            "status": status,
            "results": results
        })),
    ))
}

fn for_item(err: ApiError, index: usize) -> ApiError {
    ApiError::bad_request(format!("{} for item #{}", err.message(), index))
}
