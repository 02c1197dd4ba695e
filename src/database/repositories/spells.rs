use sqlx::{PgPool, QueryBuilder};
use uuid::Uuid;

use super::page_sql;
use crate::database::models::{Spell, SpellDetail};
use crate::database::DatabaseError;
use crate::types::Pagination;

#[derive(Debug, Default)]
pub struct SpellPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub type_id: Option<Uuid>,
}

impl SpellPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.type_id.is_none()
    }
}

pub struct SpellRepository {
    pool: PgPool,
}

impl SpellRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Spell>, DatabaseError> {
        let spell = sqlx::query_as::<_, Spell>("SELECT * FROM spells WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(spell)
    }

    /// Spell with its type's name, for the detail endpoint.
    pub async fn find_detail_by_id(&self, id: Uuid) -> Result<Option<SpellDetail>, DatabaseError> {
        let detail = sqlx::query_as::<_, SpellDetail>(
            "SELECT s.id, s.name, s.description, s.type_id, s.created_at, t.name AS type_name \
             FROM spells s JOIN spell_types t ON t.id = s.type_id WHERE s.id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(detail)
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<Spell>, DatabaseError> {
        let spell = sqlx::query_as::<_, Spell>("SELECT * FROM spells WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;
        Ok(spell)
    }

    pub async fn insert(
        &self,
        name: &str,
        description: &str,
        type_id: Uuid,
    ) -> Result<Spell, DatabaseError> {
        let spell = sqlx::query_as::<_, Spell>(
            "INSERT INTO spells (name, description, type_id) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(name)
        .bind(description)
        .bind(type_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(spell)
    }

    pub async fn list(&self, pagination: Option<&Pagination>) -> Result<Vec<Spell>, DatabaseError> {
        let sql = format!(
            "SELECT * FROM spells ORDER BY created_at DESC{}",
            page_sql(pagination)
        );
        let spells = sqlx::query_as::<_, Spell>(&sql).fetch_all(&self.pool).await?;
        Ok(spells)
    }

    pub async fn count(&self) -> Result<i64, DatabaseError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM spells")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    pub async fn update(&self, id: Uuid, patch: &SpellPatch) -> Result<Spell, DatabaseError> {
        if patch.is_empty() {
            let spell = sqlx::query_as::<_, Spell>("SELECT * FROM spells WHERE id = $1")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
            return Ok(spell);
        }

        let mut qb: QueryBuilder<'_, sqlx::Postgres> = QueryBuilder::new("UPDATE spells SET ");
        let mut fields = qb.separated(", ");
        if let Some(name) = &patch.name {
            fields.push("name = ");
            fields.push_bind_unseparated(name);
        }
        if let Some(description) = &patch.description {
            fields.push("description = ");
            fields.push_bind_unseparated(description);
        }
        if let Some(type_id) = &patch.type_id {
            fields.push("type_id = ");
            fields.push_bind_unseparated(type_id);
        }
        qb.push(" WHERE id = ");
        qb.push_bind(id);
        qb.push(" RETURNING *");

        let spell = qb.build_query_as::<Spell>().fetch_one(&self.pool).await?;
        Ok(spell)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), DatabaseError> {
        sqlx::query("DELETE FROM spells WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
