use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::extract;
use crate::error::ApiError;

/// A per-user profile row with the request counter the list endpoint
/// increments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRequestRecord {
    pub user_id: String,
    pub phone: String,
    pub full_name: String,
    pub telegram_nick: String,
    pub request_count: i64,
}

impl UserRequestRecord {
    /// Decode a registration payload. All profile fields are required and
    /// non-empty; the initial counter is optional and must be non-negative.
    pub fn from_payload(payload: &Value) -> Result<Self, ApiError> {
        let record = Self {
            user_id: extract::required_non_empty(payload, "user_id")?,
            phone: extract::required_non_empty(payload, "phone")?,
            full_name: extract::required_non_empty(payload, "full_name")?,
            telegram_nick: extract::required_non_empty(payload, "telegram_nick")?,
            request_count: extract::optional(payload, "request_count", 0)?,
        };
        if record.request_count < 0 {
            return Err(ApiError::bad_request("request_count must be non-negative"));
        }
        Ok(record)
    }
}
