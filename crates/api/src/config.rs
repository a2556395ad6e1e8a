//! Environment configuration.
//!
//! All runtime settings are read once at startup and carried in an explicit
//! config struct; nothing is read from the environment after boot.

use chrono::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    /// TCP port to listen on (`PORT`, default 8080).
    pub port: u16,

    /// HS256 signing secret (`JWT_SECRET`).
    pub jwt_secret: String,

    /// Access token validity window (`TOKEN_TTL_MINUTES`, default 60).
    pub token_ttl: Duration,

    /// CORS allow-list (`CORS_ALLOWED_ORIGINS`, comma-separated). Empty
    /// means any origin (dev default).
    pub cors_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(8080);

        let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set; using insecure dev default");
            "dev-secret".to_string()
        });

        let ttl_minutes: i64 = std::env::var("TOKEN_TTL_MINUTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(60);

        let cors_origins = std::env::var("CORS_ALLOWED_ORIGINS")
            .map(|v| {
                v.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            port,
            jwt_secret,
            token_ttl: Duration::minutes(ttl_minutes),
            cors_origins,
        }
    }
}
