use sqlx::{PgPool, QueryBuilder};
use uuid::Uuid;

use super::page_sql;
use crate::database::models::SpellType;
use crate::database::DatabaseError;
use crate::types::Pagination;

#[derive(Debug, Default)]
pub struct SpellTypePatch {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl SpellTypePatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}

pub struct SpellTypeRepository {
    pool: PgPool,
}

impl SpellTypeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<SpellType>, DatabaseError> {
        let spell_type = sqlx::query_as::<_, SpellType>("SELECT * FROM spell_types WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(spell_type)
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<SpellType>, DatabaseError> {
        let spell_type =
            sqlx::query_as::<_, SpellType>("SELECT * FROM spell_types WHERE name = $1")
                .bind(name)
                .fetch_optional(&self.pool)
                .await?;
        Ok(spell_type)
    }

    pub async fn insert(&self, name: &str, description: &str) -> Result<SpellType, DatabaseError> {
        let spell_type = sqlx::query_as::<_, SpellType>(
            "INSERT INTO spell_types (name, description) VALUES ($1, $2) RETURNING *",
        )
        .bind(name)
        .bind(description)
        .fetch_one(&self.pool)
        .await?;
        Ok(spell_type)
    }

    pub async fn list(
        &self,
        pagination: Option<&Pagination>,
    ) -> Result<Vec<SpellType>, DatabaseError> {
        let sql = format!(
            "SELECT * FROM spell_types ORDER BY created_at DESC{}",
            page_sql(pagination)
        );
        let spell_types = sqlx::query_as::<_, SpellType>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(spell_types)
    }

    pub async fn count(&self) -> Result<i64, DatabaseError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM spell_types")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    pub async fn update(
        &self,
        id: Uuid,
        patch: &SpellTypePatch,
    ) -> Result<SpellType, DatabaseError> {
        if patch.is_empty() {
            let spell_type =
                sqlx::query_as::<_, SpellType>("SELECT * FROM spell_types WHERE id = $1")
                    .bind(id)
                    .fetch_one(&self.pool)
                    .await?;
            return Ok(spell_type);
        }

        let mut qb: QueryBuilder<'_, sqlx::Postgres> =
            QueryBuilder::new("UPDATE spell_types SET ");
        let mut fields = qb.separated(", ");
        if let Some(name) = &patch.name {
            fields.push("name = ");
            fields.push_bind_unseparated(name);
        }
        if let Some(description) = &patch.description {
            fields.push("description = ");
            fields.push_bind_unseparated(description);
        }
        qb.push(" WHERE id = ");
        qb.push_bind(id);
        qb.push(" RETURNING *");

        let spell_type = qb
            .build_query_as::<SpellType>()
            .fetch_one(&self.pool)
            .await?;
        Ok(spell_type)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), DatabaseError> {
        sqlx::query("DELETE FROM spell_types WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
