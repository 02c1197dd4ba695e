use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    pub id: Uuid,
    pub email: String,
    /// bcrypt hash. Never serialized; responses expose id/email only.
    #[serde(skip_serializing)]
    pub password: String,
    pub created_at: DateTime<Utc>,
}
