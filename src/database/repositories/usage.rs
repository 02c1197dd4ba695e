use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use super::page_sql;
use crate::database::models::UsageEvent;
use crate::database::DatabaseError;
use crate::types::Pagination;

/// Append-only access to the metering log.
pub struct UsageRepository {
    pool: PgPool,
}

impl UsageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Number of events recorded for a user at or after `since`.
    pub async fn count_since(
        &self,
        user_id: Uuid,
        since: DateTime<Utc>,
    ) -> Result<i64, DatabaseError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM usage_events WHERE user_id = $1 AND \"timestamp\" >= $2",
        )
        .bind(user_id)
        .bind(since)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }

    pub async fn insert(&self, user_id: Uuid, endpoint: &str) -> Result<UsageEvent, DatabaseError> {
        let event = sqlx::query_as::<_, UsageEvent>(
            "INSERT INTO usage_events (user_id, endpoint) VALUES ($1, $2) RETURNING *",
        )
        .bind(user_id)
        .bind(endpoint)
        .fetch_one(&self.pool)
        .await?;
        Ok(event)
    }

    pub async fn list_for_user(
        &self,
        user_id: Uuid,
        pagination: &Pagination,
    ) -> Result<Vec<UsageEvent>, DatabaseError> {
        let sql = format!(
            "SELECT * FROM usage_events WHERE user_id = $1 ORDER BY \"timestamp\" DESC{}",
            page_sql(Some(pagination))
        );
        let events = sqlx::query_as::<_, UsageEvent>(&sql)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(events)
    }

    pub async fn count_for_user(&self, user_id: Uuid) -> Result<i64, DatabaseError> {
        let count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM usage_events WHERE user_id = $1")
                .bind(user_id)
                .fetch_one(&self.pool)
                .await?;
        Ok(count)
    }
}
