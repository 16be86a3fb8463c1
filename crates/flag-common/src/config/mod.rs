//! Configuration loading and validation

pub mod app_config;

pub use app_config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, Environment, FlagMessages,
    FlaggingConfig, RateLimitConfig, RedisConfig, ServerConfig,
};
