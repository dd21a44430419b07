//! Startup table bootstrap. Not a migration system: both statements are
//! idempotent and only create what a fresh database is missing.

use sqlx::PgPool;

use super::manager::DatabaseError;

const CREATE_MASTERCLASSES: &str = "\
CREATE TABLE IF NOT EXISTS masterclasses (
    id        BIGINT PRIMARY KEY,
    title     TEXT NOT NULL,
    location  TEXT NOT NULL,
    price     DOUBLE PRECISION NOT NULL,
    website   TEXT NOT NULL,
    image_url TEXT NOT NULL
)";

// Profile columns default to '' so the request-tracking upsert can create a
// bare counter row for a user that never registered.
const CREATE_USER_REQUESTS: &str = "\
CREATE TABLE IF NOT EXISTS user_requests (
    user_id       TEXT PRIMARY KEY,
    phone         TEXT NOT NULL DEFAULT '',
    full_name     TEXT NOT NULL DEFAULT '',
    telegram_nick TEXT NOT NULL DEFAULT '',
    request_count BIGINT NOT NULL DEFAULT 0
)";

pub async fn ensure_schema(catalog: &PgPool, users: &PgPool) -> Result<(), DatabaseError> {
    sqlx::query(CREATE_MASTERCLASSES).execute(catalog).await?;
    sqlx::query(CREATE_USER_REQUESTS).execute(users).await?;
    Ok(())
}
