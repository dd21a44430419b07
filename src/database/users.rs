use sqlx::{PgPool, Row};

use super::manager::DatabaseError;
use super::models::UserRequestRecord;
use super::{DeleteOutcome, InsertOutcome};

const INSERT_USER: &str = "\
INSERT INTO user_requests (user_id, phone, full_name, telegram_nick, request_count) \
VALUES ($1, $2, $3, $4, $5) \
ON CONFLICT (user_id) DO NOTHING";

const DELETE_USER: &str = "DELETE FROM user_requests WHERE user_id = $1";

// Unconditional upsert: listing with an unregistered user_id creates a bare
// counter row (profile columns keep their '' defaults).
const TRACK_USER_REQUEST: &str = "\
INSERT INTO user_requests (user_id, request_count) VALUES ($1, 1) \
ON CONFLICT (user_id) DO UPDATE \
SET request_count = user_requests.request_count + 1 \
RETURNING request_count";

/// User store: registrations, deletions and the per-user request counter.
/// Every statement here is a write and runs on the primary.
#[derive(Clone)]
pub struct UserStore {
    primary: PgPool,
}

impl UserStore {
    pub fn new(primary: PgPool) -> Self {
        Self { primary }
    }

    pub async fn insert(&self, user: &UserRequestRecord) -> Result<InsertOutcome, DatabaseError> {
        let result = sqlx::query(INSERT_USER)
            .bind(&user.user_id)
            .bind(&user.phone)
            .bind(&user.full_name)
            .bind(&user.telegram_nick)
            .bind(user.request_count)
            .execute(&self.primary)
            .await?;
        Ok(InsertOutcome::from_rows_affected(result.rows_affected()))
    }

    pub async fn delete(&self, user_id: &str) -> Result<DeleteOutcome, DatabaseError> {
        let result = sqlx::query(DELETE_USER)
            .bind(user_id)
            .execute(&self.primary)
            .await?;
        Ok(DeleteOutcome::from_rows_affected(result.rows_affected()))
    }

    /// Increment the user's request counter, creating the row when missing,
    /// and return the updated value.
    pub async fn track_request(&self, user_id: &str) -> Result<i64, DatabaseError> {
        let row = sqlx::query(TRACK_USER_REQUEST)
            .bind(user_id)
            .fetch_one(&self.primary)
            .await?;
        Ok(row.try_get("request_count")?)
    }
}
