use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Spell {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub type_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Spell joined with its type's name, for the detail endpoint.
#[derive(Debug, Clone, FromRow)]
pub struct SpellDetail {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub type_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub type_name: String,
}
