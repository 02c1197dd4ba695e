use once_cell::sync::Lazy;
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub port: u16,
    pub database_url: String,
    pub jwt_secret: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl AppConfig {
    /// Load configuration from the environment. DATABASE_URL and PORT are
    /// required and checked here so a misconfigured process dies at startup
    /// rather than on the first request; JWT_SECRET is carried along and
    /// emptiness-checked at token operations.
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            _ => Environment::Development,
        };

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| panic!("DATABASE_URL is missing"));

        let port = env::var("PORT")
            .unwrap_or_else(|_| panic!("PORT is missing"))
            .parse::<u16>()
            .unwrap_or_else(|_| panic!("PORT is not a valid port number"));

        let jwt_secret = env::var("JWT_SECRET").unwrap_or_default();

        Self {
            environment,
            port,
            database_url,
            jwt_secret,
        }
    }
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

// Convenience function for accessing config
pub fn config() -> &'static AppConfig {
    &CONFIG
}
