use serde::Deserialize;
use std::env;

// Главная структура конфигурации - контейнер для всех настроек
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
}

// Настройки приложения
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub environment: String,
    pub rust_log: String,
}

// Настройки базы данных
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub pool_size: u32,
}

#[derive(Debug, thiserror::Error)]
#[error("{name} must be a valid number, got {value:?}")]
pub struct ConfigError {
    pub name: &'static str,
    pub value: String,
}

fn var_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let pool_size = var_or("DB_POOL_SIZE", "1");

        Ok(Config {
            app: AppConfig {
                environment: var_or("ENVIRONMENT", "development"),
                rust_log: var_or("RUST_LOG", "movie_booking=warn"),
            },
            database: DatabaseConfig {
                url: var_or("DATABASE_URL", "sqlite://movie_booking.db?mode=rwc"),
                pool_size: pool_size.parse().map_err(|_| ConfigError {
                    name: "DB_POOL_SIZE",
                    value: pool_size.clone(),
                })?,
            },
        })
    }
}
