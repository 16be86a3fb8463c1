//! Application configuration structs
//!
//! Loads configuration from environment variables (with .env support).

use serde::Deserialize;
use std::env;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub redis: RedisConfig,
    pub flagging: FlaggingConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

/// Redis configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RedisConfig {
    pub url: String,
    #[serde(default = "default_redis_max_connections")]
    pub max_connections: u32,
}

/// Flagging policy configuration
///
/// `threshold` is the site-wide number of distinct reports that sends a
/// comment to moderation. Unset (or invalid) means escalation is disabled;
/// flags are still counted.
#[derive(Debug, Clone, Deserialize)]
pub struct FlaggingConfig {
    /// Reports needed to escalate a comment (1-100); None disables escalation
    #[serde(default)]
    pub threshold: Option<u32>,
    /// Flags tolerated per fingerprint and comment when individual clients
    /// present clean tokens. Must stay strictly below the threshold or a
    /// single network address could force moderation on its own.
    #[serde(default = "default_no_cookie_grace")]
    pub no_cookie_grace: u32,
    /// Lifetime of the client-held flag token
    #[serde(default = "default_client_token_ttl")]
    pub client_token_ttl_secs: u64,
    /// Lifetime of the server-held fraud record; intentionally shorter than
    /// the token lifetime so shared networks (offices) are not punished long.
    #[serde(default = "default_fraud_record_ttl")]
    pub fraud_record_ttl_secs: u64,
    /// Allow comments a moderator already ruled on to be escalated again
    #[serde(default)]
    pub allow_reflag_after_moderation: bool,
    /// User-visible response messages
    #[serde(default)]
    pub messages: FlagMessages,
}

impl Default for FlaggingConfig {
    fn default() -> Self {
        Self {
            threshold: None,
            no_cookie_grace: default_no_cookie_grace(),
            client_token_ttl_secs: default_client_token_ttl(),
            fraud_record_ttl_secs: default_fraud_record_ttl(),
            allow_reflag_after_moderation: false,
            messages: FlagMessages::default(),
        }
    }
}

impl FlaggingConfig {
    /// Client token lifetime as a Duration
    #[must_use]
    pub fn client_token_ttl(&self) -> Duration {
        Duration::from_secs(self.client_token_ttl_secs)
    }

    /// Fraud record lifetime as a Duration
    #[must_use]
    pub fn fraud_record_ttl(&self) -> Duration {
        Duration::from_secs(self.fraud_record_ttl_secs)
    }

    /// Validate the flagging policy
    ///
    /// Rejects thresholds outside 1-100 and a grace count that is not
    /// strictly below the threshold.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(threshold) = self.threshold {
            if !(1..=100).contains(&threshold) {
                return Err(ConfigError::InvalidValue(
                    "FLAG_THRESHOLD",
                    format!("{threshold} (must be between 1 and 100)"),
                ));
            }
            if self.no_cookie_grace >= threshold {
                return Err(ConfigError::InvalidValue(
                    "FLAG_NO_COOKIE_GRACE",
                    format!(
                        "{} (must be strictly below the threshold {threshold})",
                        self.no_cookie_grace
                    ),
                ));
            }
        }
        Ok(())
    }
}

/// User-visible response messages
#[derive(Debug, Clone, Deserialize)]
pub struct FlagMessages {
    #[serde(default = "default_thank_you")]
    pub thank_you: String,
    #[serde(default = "default_already_flagged")]
    pub already_flagged: String,
    #[serde(default = "default_invalid_request")]
    pub invalid_request: String,
}

impl Default for FlagMessages {
    fn default() -> Self {
        Self {
            thank_you: default_thank_you(),
            already_flagged: default_already_flagged(),
            invalid_request: default_invalid_request(),
        }
    }
}

/// Rate limiting configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,
    #[serde(default = "default_burst")]
    pub burst: u32,
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

// Default value functions
fn default_app_name() -> String {
    "flagpost".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

fn default_redis_max_connections() -> u32 {
    10
}

fn default_no_cookie_grace() -> u32 {
    3
}

fn default_client_token_ttl() -> u64 {
    7 * 24 * 60 * 60 // 7 days
}

fn default_fraud_record_ttl() -> u64 {
    24 * 60 * 60 // 1 day
}

fn default_thank_you() -> String {
    "Thank you for your feedback. We will look into it.".to_string()
}

fn default_already_flagged() -> String {
    "It seems you already reported this comment.".to_string()
}

fn default_invalid_request() -> String {
    "Invalid comment reference.".to_string()
}

fn default_requests_per_second() -> u32 {
    10
}

fn default_burst() -> u32 {
    50
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing or
    /// the flagging policy is invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let config = Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env: env::var("APP_ENV")
                    .ok()
                    .and_then(|s| match s.to_lowercase().as_str() {
                        "production" => Some(Environment::Production),
                        "staging" => Some(Environment::Staging),
                        "development" => Some(Environment::Development),
                        _ => None,
                    })
                    .unwrap_or_default(),
            },
            server: ServerConfig {
                host: env::var("SERVER_HOST").unwrap_or_else(|_| default_host()),
                port: env::var("SERVER_PORT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .ok_or(ConfigError::MissingVar("SERVER_PORT"))?,
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?,
                max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_max_connections),
                min_connections: env::var("DATABASE_MIN_CONNECTIONS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_min_connections),
            },
            redis: RedisConfig {
                url: env::var("REDIS_URL").map_err(|_| ConfigError::MissingVar("REDIS_URL"))?,
                max_connections: env::var("REDIS_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_redis_max_connections),
            },
            flagging: FlaggingConfig {
                threshold: env::var("FLAG_THRESHOLD").ok().and_then(|s| s.parse().ok()),
                no_cookie_grace: env::var("FLAG_NO_COOKIE_GRACE")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_no_cookie_grace),
                client_token_ttl_secs: env::var("FLAG_CLIENT_TOKEN_TTL_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_client_token_ttl),
                fraud_record_ttl_secs: env::var("FLAG_FRAUD_RECORD_TTL_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_fraud_record_ttl),
                allow_reflag_after_moderation: env::var("FLAG_ALLOW_REFLAG")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(false),
                messages: FlagMessages {
                    thank_you: env::var("FLAG_MESSAGE_THANK_YOU")
                        .unwrap_or_else(|_| default_thank_you()),
                    already_flagged: env::var("FLAG_MESSAGE_ALREADY_FLAGGED")
                        .unwrap_or_else(|_| default_already_flagged()),
                    invalid_request: env::var("FLAG_MESSAGE_INVALID_REQUEST")
                        .unwrap_or_else(|_| default_invalid_request()),
                },
            },
            rate_limit: RateLimitConfig {
                requests_per_second: env::var("RATE_LIMIT_REQUESTS_PER_SECOND")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_requests_per_second),
                burst: env::var("RATE_LIMIT_BURST")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_burst),
            },
            cors: CorsConfig {
                allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                    .ok()
                    .map(|s| s.split(',').map(str::trim).map(String::from).collect())
                    .unwrap_or_default(),
            },
        };

        config.flagging.validate()?;

        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
