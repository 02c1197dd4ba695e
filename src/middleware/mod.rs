pub mod admin;
pub mod api_key;

pub use admin::admin_auth_middleware;
pub use api_key::{api_key_auth_middleware, rate_limit_middleware};
