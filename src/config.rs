use serde::{Deserialize, Serialize};
use std::env;

/// Runtime configuration, read from the environment once at startup and
/// carried in [`crate::state::AppState`] — no global singleton.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt_secret: String,
    pub host: String,
    pub port: u16,
    pub token_ttl_hours: i64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let mut config = Self::development();

        if let Ok(v) = env::var("DATABASE_URL") {
            config.database_url = v;
        }
        if let Ok(v) = env::var("JWT_SECRET") {
            config.jwt_secret = v;
        }
        if let Ok(v) = env::var("HOST") {
            config.host = v;
        }
        if let Ok(v) = env::var("PORT") {
            config.port = v.parse().unwrap_or(config.port);
        }
        if let Ok(v) = env::var("TOKEN_TTL_HOURS") {
            config.token_ttl_hours = v.parse().unwrap_or(config.token_ttl_hours);
        }

        config
    }

    fn development() -> Self {
        Self {
            database_url: "sqlite://products.db".to_string(),
            jwt_secret: "super-secret".to_string(),
            host: "127.0.0.1".to_string(),
            port: 5000,
            token_ttl_hours: 24,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
