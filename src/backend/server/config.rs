/**
 * Server Configuration
 *
 * This module loads the server configuration from the environment (and
 * a `.env` file when present) and opens the configured store.
 *
 * # Environment Variables
 *
 * | Variable                 | Default                  |
 * |--------------------------|--------------------------|
 * | `HOST`                   | `0.0.0.0`                |
 * | `PORT`                   | `3001`                   |
 * | `DATABASE_URL`           | unset: in-memory store   |
 * | `JWT_SECRET`             | dev fallback, see below  |
 * | `JWT_TTL_SECS`           | `604800` (7 days)        |
 * | `BCRYPT_COST`            | `10`                     |
 * | `CORS_ORIGIN`            | `http://localhost:3000`  |
 * | `RATE_LIMIT_WINDOW_SECS` | `900`                    |
 * | `RATE_LIMIT_MAX`         | `1000`                   |
 * | `APP_ENV`                | `development`            |
 *
 * Outside production a missing `JWT_SECRET` falls back to a fixed
 * development secret and logs a warning. With `APP_ENV=production` it is a
 * configuration error.
 */

use std::fmt;
use std::time::Duration;

use sqlx::PgPool;
use thiserror::Error;

use crate::backend::store::Store;

/// Secret used when `JWT_SECRET` is unset outside production
pub const DEV_JWT_SECRET: &str = "dev-secret-change-me";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
}

/// Application configuration
#[derive(Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Postgres URL; `None` selects the in-memory store
    pub database_url: Option<String>,
    pub jwt_secret: String,
    pub token_ttl: Duration,
    pub bcrypt_cost: u32,
    /// Frontend origin allowed to send credentialed requests
    pub cors_origin: String,
    pub rate_limit_window: Duration,
    pub rate_limit_max: u32,
    pub production: bool,
}

// The secret never reaches the logs
impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database_url", &self.database_url.as_ref().map(|_| "<set>"))
            .field("jwt_secret", &"<redacted>")
            .field("token_ttl", &self.token_ttl)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("cors_origin", &self.cors_origin)
            .field("rate_limit_window", &self.rate_limit_window)
            .field("rate_limit_max", &self.rate_limit_max)
            .field("production", &self.production)
            .finish()
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load configuration from environment variables and `.env`
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        let var = |key: &str| std::env::var(key).ok().filter(|v| !v.trim().is_empty());

        let production = var("APP_ENV").is_some_and(|v| v.eq_ignore_ascii_case("production"));
        let mut builder = AppConfig::builder().production(production);

        if let Some(host) = var("HOST") {
            builder = builder.host(host);
        }
        if let Some(port) = var("PORT") {
            builder = builder.port(parse_number("PORT", &port)?);
        }
        if let Some(url) = var("DATABASE_URL") {
            builder = builder.database_url(url);
        }
        if let Some(secret) = var("JWT_SECRET") {
            builder = builder.jwt_secret(secret);
        }
        if let Some(ttl) = var("JWT_TTL_SECS") {
            builder = builder.token_ttl(Duration::from_secs(parse_number("JWT_TTL_SECS", &ttl)?));
        }
        if let Some(cost) = var("BCRYPT_COST") {
            builder = builder.bcrypt_cost(parse_number("BCRYPT_COST", &cost)?);
        }
        if let Some(origin) = var("CORS_ORIGIN") {
            builder = builder.cors_origin(origin);
        }
        if let Some(window) = var("RATE_LIMIT_WINDOW_SECS") {
            builder = builder.rate_limit_window(Duration::from_secs(parse_number(
                "RATE_LIMIT_WINDOW_SECS",
                &window,
            )?));
        }
        if let Some(max) = var("RATE_LIMIT_MAX") {
            builder = builder.rate_limit_max(parse_number("RATE_LIMIT_MAX", &max)?);
        }

        builder.build()
    }

    /// Socket address string for `TcpListener::bind`
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_number<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    host: Option<String>,
    port: Option<u16>,
    database_url: Option<String>,
    jwt_secret: Option<String>,
    token_ttl: Option<Duration>,
    bcrypt_cost: Option<u32>,
    cors_origin: Option<String>,
    rate_limit_window: Option<Duration>,
    rate_limit_max: Option<u32>,
    production: bool,
}

impl AppConfigBuilder {
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    pub fn token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = Some(ttl);
        self
    }

    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    pub fn cors_origin(mut self, origin: impl Into<String>) -> Self {
        self.cors_origin = Some(origin.into());
        self
    }

    pub fn rate_limit_window(mut self, window: Duration) -> Self {
        self.rate_limit_window = Some(window);
        self
    }

    pub fn rate_limit_max(mut self, max: u32) -> Self {
        self.rate_limit_max = Some(max);
        self
    }

    pub fn production(mut self, production: bool) -> Self {
        self.production = production;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let jwt_secret = match self.jwt_secret {
            Some(secret) => secret,
            None if self.production => return Err(ConfigError::MissingValue("JWT_SECRET")),
            None => {
                tracing::warn!("JWT_SECRET not set, using the development secret");
                DEV_JWT_SECRET.to_string()
            }
        };

        let bcrypt_cost = self.bcrypt_cost.unwrap_or(10);
        if !(4..=31).contains(&bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                key: "BCRYPT_COST",
                value: bcrypt_cost.to_string(),
            });
        }

        let rate_limit_max = self.rate_limit_max.unwrap_or(1000);
        if rate_limit_max == 0 {
            return Err(ConfigError::InvalidValue {
                key: "RATE_LIMIT_MAX",
                value: "0".to_string(),
            });
        }

        let rate_limit_window = self.rate_limit_window.unwrap_or(Duration::from_secs(15 * 60));
        if rate_limit_window.is_zero() {
            return Err(ConfigError::InvalidValue {
                key: "RATE_LIMIT_WINDOW_SECS",
                value: "0".to_string(),
            });
        }

        Ok(AppConfig {
            host: self.host.unwrap_or_else(|| "0.0.0.0".to_string()),
            port: self.port.unwrap_or(3001),
            database_url: self.database_url,
            jwt_secret,
            token_ttl: self.token_ttl.unwrap_or(Duration::from_secs(7 * 24 * 60 * 60)),
            bcrypt_cost,
            cors_origin: self
                .cors_origin
                .unwrap_or_else(|| "http://localhost:3000".to_string()),
            rate_limit_window,
            rate_limit_max,
            production: self.production,
        })
    }
}

/// Open the configured store
///
/// Without `DATABASE_URL` the server runs on the in-memory store. With it,
/// a connection failure is fatal; a migration failure is logged and the
/// server continues, since the schema may already be current.
pub async fn connect_store(config: &AppConfig) -> Result<Store, sqlx::Error> {
    let Some(database_url) = &config.database_url else {
        tracing::warn!("DATABASE_URL not set. Using the in-memory store; data will not persist.");
        return Ok(Store::memory());
    };

    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(database_url).await?;
    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    match sqlx::migrate!().run(&pool).await {
        Ok(_) => tracing::info!("Database migrations completed successfully"),
        Err(e) => {
            tracing::error!("Failed to run database migrations: {}", e);
            tracing::warn!("Continuing without migrations - database might not be up to date");
        }
    }

    Ok(Store::Postgres(pool))
}
