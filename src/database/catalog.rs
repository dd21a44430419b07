use sqlx::PgPool;

use super::manager::DatabaseError;
use super::models::Masterclass;
use super::{DeleteOutcome, InsertOutcome};

const INSERT_MASTERCLASS: &str = "\
INSERT INTO masterclasses (id, title, location, price, website, image_url) \
VALUES ($1, $2, $3, $4, $5, $6) \
ON CONFLICT (id) DO NOTHING";

const DELETE_MASTERCLASS: &str = "DELETE FROM masterclasses WHERE id = $1";

const SELECT_MASTERCLASSES: &str = "\
SELECT id, title, location, price, website, image_url \
FROM masterclasses ORDER BY id ASC LIMIT $1";

/// Catalog store: one pool for writes, one for list reads. The read pool is
/// the replica when one is configured, otherwise the same primary handle.
#[derive(Clone)]
pub struct CatalogStore {
    primary: PgPool,
    replica: PgPool,
}

impl CatalogStore {
    pub fn new(primary: PgPool, replica: PgPool) -> Self {
        Self { primary, replica }
    }

    /// Insert one catalog entry. A duplicate id is a no-op reported as
    /// `InsertOutcome::Duplicate`.
    pub async fn insert(&self, mc: &Masterclass) -> Result<InsertOutcome, DatabaseError> {
        let result = sqlx::query(INSERT_MASTERCLASS)
            .bind(mc.id)
            .bind(&mc.title)
            .bind(&mc.location)
            .bind(mc.price)
            .bind(&mc.website)
            .bind(&mc.image_url)
            .execute(&self.primary)
            .await?;
        Ok(InsertOutcome::from_rows_affected(result.rows_affected()))
    }

    pub async fn delete(&self, id: i64) -> Result<DeleteOutcome, DatabaseError> {
        let result = sqlx::query(DELETE_MASTERCLASS)
            .bind(id)
            .execute(&self.primary)
            .await?;
        Ok(DeleteOutcome::from_rows_affected(result.rows_affected()))
    }

    /// List up to `limit` entries ordered by ascending id. Zero rows is a
    /// valid result.
    pub async fn list(&self, limit: i64) -> Result<Vec<Masterclass>, DatabaseError> {
        let rows = sqlx::query_as::<_, Masterclass>(SELECT_MASTERCLASSES)
            .bind(limit)
            .fetch_all(&self.replica)
            .await?;
        Ok(rows)
    }
}
