use sqlx::PgPool;

use crate::auth;
use crate::database::models::User;
use crate::database::repositories::UserRepository;
use crate::database::{DatabaseError, DatabaseManager};
use crate::types::Plan;

#[derive(Debug, thiserror::Error)]
pub enum UserServiceError {
    #[error("User with this email already exists")]
    EmailTaken,

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

pub struct UserService {
    pool: PgPool,
}

impl UserService {
    pub async fn new() -> Result<Self, DatabaseError> {
        let pool = DatabaseManager::pool().await?;
        Ok(Self { pool })
    }

    /// Create an end-user with a freshly minted API key. The key is
    /// generated here exactly once and never changes afterwards.
    pub async fn create_user(
        &self,
        name: &str,
        email: &str,
        plan: Plan,
    ) -> Result<User, UserServiceError> {
        let repo = UserRepository::new(self.pool.clone());

        if repo.find_by_email(email).await?.is_some() {
            return Err(UserServiceError::EmailTaken);
        }

        let api_key = auth::generate_api_key();
        let user = repo.insert(name, email, plan, &api_key).await?;

        Ok(user)
    }
}
