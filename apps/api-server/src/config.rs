//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;

#[cfg(feature = "sqlite")]
use remark_infra::DatabaseConfig;
#[cfg(feature = "rate-limit")]
use remark_infra::RateLimitConfig;
use remark_infra::RandomUserConfig;

/// Number of random users seeded by `/populate` unless configured otherwise.
pub const DEFAULT_POPULATE_COUNT: usize = 3;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Only this origin may make credentialed cross-origin requests.
    pub allowed_origin: String,
    pub populate_count: usize,
    pub random_user: RandomUserConfig,
    #[cfg(feature = "sqlite")]
    pub database: DatabaseConfig,
    #[cfg(feature = "rate-limit")]
    pub rate_limit: RateLimitConfig,
}

/// Parse an env var, falling back to `default` when it is unset or invalid.
fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        #[cfg(feature = "sqlite")]
        let database = {
            let defaults = DatabaseConfig::default();
            DatabaseConfig {
                url: env::var("DATABASE_URL").unwrap_or(defaults.url),
                max_connections: env_or("DB_MAX_CONNECTIONS", defaults.max_connections),
                min_connections: env_or("DB_MIN_CONNECTIONS", defaults.min_connections),
            }
        };

        let random_user = RandomUserConfig {
            url: env::var("RANDOM_USER_API_URL")
                .unwrap_or_else(|_| RandomUserConfig::default().url),
            ..RandomUserConfig::default()
        };

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env_or("PORT", 8000),
            allowed_origin: env::var("ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            populate_count: env_or("POPULATE_COUNT", DEFAULT_POPULATE_COUNT),
            random_user,
            #[cfg(feature = "sqlite")]
            database,
            #[cfg(feature = "rate-limit")]
            rate_limit: RateLimitConfig::from_env(),
        }
    }
}
