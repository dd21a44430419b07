use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::handlers::AppState;

// Hard ceiling for the page size; larger values are clamped, not rejected.
const MAX_LIMIT: i64 = 100;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub n: Option<String>,
    pub user_id: Option<String>,
}

/// GET /mclist?n=<int>&user_id=<string> - list catalog entries and bump the
/// caller's request counter.
///
/// The counter is an unconditional upsert: an unregistered user_id gets a
/// bare counter row rather than a not-found error. The catalog read runs on
/// the replica pool; the counter write runs on the users primary.
pub async fn mc_list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let user_id = match query.user_id.as_deref() {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => return Err(ApiError::bad_request("user_id must be provided")),
    };
    let limit = parse_limit(query.n.as_deref())?;

    let rows = state.catalog.list(limit).await?;
    let request_count = state.users.track_request(&user_id).await?;

    Ok((
        StatusCode::OK,
        Json(json!({
            "user_id": user_id,
            "request_count": request_count,
            "returned": rows.len(),
            "masterclasses": rows
        })),
    ))
}

fn parse_limit(raw: Option<&str>) -> Result<i64, ApiError> {
    let raw = raw.unwrap_or("");
    if raw.is_empty() {
        return Err(ApiError::bad_request("invalid n: value is empty"));
    }
    let value: i64 = raw
        .parse()
        .map_err(|_| ApiError::bad_request("invalid n: value is not a number"))?;
    if value <= 0 {
        return Err(ApiError::bad_request("invalid n: value must be positive"));
    }
    Ok(value.min(MAX_LIMIT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_and_clamps_positive_limits() {
        assert_eq!(parse_limit(Some("1")).unwrap(), 1);
        assert_eq!(parse_limit(Some("100")).unwrap(), 100);
        assert_eq!(parse_limit(Some("500")).unwrap(), 100);
    }

    #[test]
    fn rejects_empty_nonnumeric_and_nonpositive() {
        assert_eq!(
            parse_limit(None).unwrap_err().message(),
            "invalid n: value is empty"
        );
        assert_eq!(
            parse_limit(Some("abc")).unwrap_err().message(),
            "invalid n: value is not a number"
        );
        assert_eq!(
            parse_limit(Some("0")).unwrap_err().message(),
            "invalid n: value must be positive"
        );
        assert_eq!(
            parse_limit(Some("-5")).unwrap_err().message(),
            "invalid n: value must be positive"
        );
    }
}
