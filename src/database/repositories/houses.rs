use sqlx::{PgPool, QueryBuilder};
use uuid::Uuid;

use super::page_sql;
use crate::database::models::House;
use crate::database::DatabaseError;
use crate::types::Pagination;

/// Sparse update for a house. `None` fields are left untouched.
#[derive(Debug, Default)]
pub struct HousePatch {
    pub name: Option<String>,
    pub logo: Option<String>,
    pub creator: Option<String>,
}

impl HousePatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.logo.is_none() && self.creator.is_none()
    }
}

pub struct HouseRepository {
    pool: PgPool,
}

impl HouseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<House>, DatabaseError> {
        let house = sqlx::query_as::<_, House>("SELECT * FROM houses WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(house)
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<House>, DatabaseError> {
        let house = sqlx::query_as::<_, House>("SELECT * FROM houses WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;
        Ok(house)
    }

    pub async fn insert(
        &self,
        name: &str,
        logo: &str,
        creator: &str,
    ) -> Result<House, DatabaseError> {
        let house = sqlx::query_as::<_, House>(
            "INSERT INTO houses (name, logo, creator) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(name)
        .bind(logo)
        .bind(creator)
        .fetch_one(&self.pool)
        .await?;
        Ok(house)
    }

    pub async fn list(&self, pagination: Option<&Pagination>) -> Result<Vec<House>, DatabaseError> {
        let sql = format!(
            "SELECT * FROM houses ORDER BY created_at DESC{}",
            page_sql(pagination)
        );
        let houses = sqlx::query_as::<_, House>(&sql).fetch_all(&self.pool).await?;
        Ok(houses)
    }

    pub async fn count(&self) -> Result<i64, DatabaseError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM houses")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    pub async fn update(&self, id: Uuid, patch: &HousePatch) -> Result<House, DatabaseError> {
        if patch.is_empty() {
            // Nothing to apply; hand back the current row.
            let house = sqlx::query_as::<_, House>("SELECT * FROM houses WHERE id = $1")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
            return Ok(house);
        }

        let mut qb: QueryBuilder<'_, sqlx::Postgres> = QueryBuilder::new("UPDATE houses SET ");
        let mut fields = qb.separated(", ");
        if let Some(name) = &patch.name {
            fields.push("name = ");
            fields.push_bind_unseparated(name);
        }
        if let Some(logo) = &patch.logo {
            fields.push("logo = ");
            fields.push_bind_unseparated(logo);
        }
        if let Some(creator) = &patch.creator {
            fields.push("creator = ");
            fields.push_bind_unseparated(creator);
        }
        qb.push(" WHERE id = ");
        qb.push_bind(id);
        qb.push(" RETURNING *");

        let house = qb.build_query_as::<House>().fetch_one(&self.pool).await?;
        Ok(house)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), DatabaseError> {
        sqlx::query("DELETE FROM houses WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
