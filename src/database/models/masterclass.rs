use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

use crate::api::extract;
use crate::error::ApiError;

/// A catalog entry. The id is externally supplied and immutable; rows are
/// only ever inserted and deleted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Masterclass {
    pub id: i64,
    pub title: String,
    pub location: String,
    pub price: f64,
    pub website: String,
    pub image_url: String,
}

impl Masterclass {
    /// Decode a catalog entry from an already-parsed JSON object.
    pub fn from_payload(payload: &Value) -> Result<Self, ApiError> {
        Ok(Self {
            id: extract::required(payload, "id")?,
            title: extract::required_non_empty(payload, "title")?,
            location: extract::required(payload, "location")?,
            price: extract::required(payload, "price")?,
            website: extract::required(payload, "website")?,
            image_url: extract::required(payload, "image_url")?,
        })
    }
}
