use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct House {
    pub id: Uuid,
    pub name: String,
    pub logo: String,
    pub creator: String,
    pub created_at: DateTime<Utc>,
}
