// src/repositories/postgres.rs - Durable mapping store over PostgreSQL
use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use sqlx::{PgPool, QueryBuilder};

use crate::db::Database;
use crate::errors::StoreError;
use crate::models::{LinkQueryParams, LinkRecord, LinkStats};
use crate::repositories::LinkStore;

type Result<T> = std::result::Result<T, StoreError>;

/// Mapping store backed by PostgreSQL.
///
/// Atomicity is delegated to the database: the primary key on `code`
/// makes `INSERT .. ON CONFLICT DO NOTHING` a serialized create-if-absent,
/// and `SET clicks = clicks + 1` is applied under the row lock, so
/// concurrent increments cannot lose updates.
pub struct PgLinkStore {
    pool: PgPool,
}

impl PgLinkStore {
    pub fn new(db: Database) -> Self {
        Self {
            pool: db.get_pool().clone(),
        }
    }
}

#[async_trait]
impl LinkStore for PgLinkStore {
    async fn put_if_absent(&self, record: &LinkRecord) -> Result<bool> {
        let result = sqlx::query(
            r#"
            INSERT INTO links (code, target, created_at, clicks, last_accessed)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (code) DO NOTHING
            "#,
        )
        .bind(&record.code)
        .bind(&record.target)
        .bind(record.created_at)
        .bind(record.clicks)
        .bind(record.last_accessed)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            log::error!("Failed to insert link '{}': {}", record.code, e);
            StoreError::from(e)
        })?;

        Ok(result.rows_affected() == 1)
    }

    async fn get(&self, code: &str) -> Result<Option<LinkRecord>> {
        sqlx::query_as::<_, LinkRecord>(
            r#"
            SELECT code, target, created_at, clicks, last_accessed
            FROM links
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(StoreError::from)
    }

    async fn increment_clicks(&self, code: &str) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE links
            SET clicks = clicks + 1, last_accessed = $2
            WHERE code = $1
            "#,
        )
        .bind(code)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(StoreError::from)?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, code: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM links WHERE code = $1")
            .bind(code)
            .execute(&self.pool)
            .await
            .map_err(StoreError::from)?;

        Ok(result.rows_affected() > 0)
    }

    async fn find(&self, params: &LinkQueryParams) -> Result<Vec<LinkRecord>> {
        debug!("Listing links with params: {:?}", params);

        // Use QueryBuilder instead of manual string manipulation
        let mut query_builder = QueryBuilder::new(
            "SELECT code, target, created_at, clicks, last_accessed
            FROM links
            WHERE 1=1",
        );

        if let Some(search) = &params.search {
            let pattern = format!("%{}%", escape_like(search));
            query_builder.push(" AND (code ILIKE ");
            query_builder.push_bind(pattern.clone());
            query_builder.push(" OR target ILIKE ");
            query_builder.push_bind(pattern);
            query_builder.push(")");
        }

        query_builder.push(" ORDER BY created_at DESC");

        if let Some(limit) = params.limit {
            query_builder.push(" LIMIT ");
            query_builder.push_bind(limit);
        }

        if let Some(offset) = params.offset {
            query_builder.push(" OFFSET ");
            query_builder.push_bind(offset);
        }

        let query = query_builder.build_query_as::<LinkRecord>();

        let results = query.fetch_all(&self.pool).await.map_err(StoreError::from)?;

        Ok(results)
    }

    async fn stats(&self) -> Result<LinkStats> {
        sqlx::query_as::<_, LinkStats>(
            r#"
            SELECT COUNT(*) AS total_links,
                   COALESCE(SUM(clicks), 0)::BIGINT AS total_clicks
            FROM links
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(StoreError::from)
    }
}

/// Escape LIKE metacharacters so a search term matches literally
fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("plain"), "plain");
        assert_eq!(escape_like("50%_off"), "50\\%\\_off");
    }
}
