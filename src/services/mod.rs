pub mod admin_service;
pub mod user_service;

pub use admin_service::{AdminService, AdminServiceError};
pub use user_service::{UserService, UserServiceError};
