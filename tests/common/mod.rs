#![allow(dead_code)]

use movie_booking::{
    config::{AppConfig, Config, DatabaseConfig},
    database::Database,
    models::Show,
    AppState,
};

/// Свежая in-memory база с применёнными миграциями.
pub async fn test_db() -> Database {
    let db = Database::in_memory().await.expect("in-memory sqlite");
    db.run_migrations().await.expect("migrations");
    db
}

pub fn test_config() -> Config {
    Config {
        app: AppConfig {
            environment: "test".to_string(),
            rust_log: "movie_booking=debug".to_string(),
        },
        database: DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            pool_size: 1,
        },
    }
}

pub async fn test_state() -> AppState {
    AppState::from_database(test_db().await, test_config())
}

pub fn show(hall_number: i64) -> Show {
    Show::new(format!("Show {}", hall_number), "19:30", hall_number)
}

pub async fn insert_seat(db: &Database, hall: i64, row: i64, col: i64, status: &str) {
    sqlx::query("INSERT INTO seats (hall_number, seat_row, seat_col, status) VALUES (?, ?, ?, ?)")
        .bind(hall)
        .bind(row)
        .bind(col)
        .bind(status)
        .execute(&db.pool)
        .await
        .expect("insert seat");
}
