use sqlx::PgPool;

use crate::auth::{self, AuthError, Claims};
use crate::database::models::Admin;
use crate::database::repositories::AdminRepository;
use crate::database::{DatabaseError, DatabaseManager};

#[derive(Debug, thiserror::Error)]
pub enum AdminServiceError {
    #[error("User with this email already exists")]
    EmailTaken,

    #[error("Invalid email")]
    InvalidEmail,

    #[error("Invalid password")]
    InvalidPassword,

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

pub struct AdminService {
    pool: PgPool,
}

impl AdminService {
    pub async fn new() -> Result<Self, DatabaseError> {
        let pool = DatabaseManager::pool().await?;
        Ok(Self { pool })
    }

    pub async fn create_admin(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Admin, AdminServiceError> {
        let repo = AdminRepository::new(self.pool.clone());

        if repo.find_by_email(email).await?.is_some() {
            return Err(AdminServiceError::EmailTaken);
        }

        let hashed = auth::hash_password(password)?;
        let admin = repo.insert(email, &hashed).await?;

        Ok(admin)
    }

    /// Verify credentials and issue a 1-day admin session token.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<(Admin, String), AdminServiceError> {
        let repo = AdminRepository::new(self.pool.clone());

        let admin = repo
            .find_by_email(email)
            .await?
            .ok_or(AdminServiceError::InvalidEmail)?;

        if !auth::verify_password(password, &admin.password)? {
            return Err(AdminServiceError::InvalidPassword);
        }

        let token = auth::generate_jwt(&Claims::for_admin(admin.id))?;

        Ok((admin, token))
    }
}
