pub mod config;
pub mod controllers;
pub mod database;
pub mod error;
pub mod models;
pub mod services;

use anyhow::Context;

pub use error::{BookingError, BookingResult};

// Общее состояние приложения: соединение с БД передаётся явно, глобальных нет
#[derive(Clone)]
pub struct AppState {
    pub db: database::Database,
    pub credentials: services::CredentialStore,
    pub config: config::Config,
}

impl AppState {
    pub async fn new(config: config::Config) -> anyhow::Result<Self> {
        let db = database::Database::new(&config.database.url, config.database.pool_size)
            .await
            .with_context(|| format!("Failed to connect to database {}", config.database.url))?;

        db.run_migrations()
            .await
            .context("Failed to run migrations")?;

        Ok(Self::from_database(db, config))
    }

    pub fn from_database(db: database::Database, config: config::Config) -> Self {
        let credentials = services::CredentialStore::new(db.clone());
        Self { db, credentials, config }
    }
}
