use serde::Serialize;
use sqlx::FromRow;

use crate::database::Database;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Credential {
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
}

impl Credential {
    // Найти учётную запись по имени пользователя
    pub async fn find_by_username(username: &str, db: &Database) -> Result<Option<Credential>, sqlx::Error> {
        sqlx::query_as::<_, Credential>(
            "SELECT username, password FROM users WHERE username = ?"
        )
        .bind(username)
        .fetch_optional(&db.pool)
        .await
    }

    // Атомарная вставка: false, если имя уже занято
    pub async fn insert_if_absent(username: &str, password: &str, db: &Database) -> Result<bool, sqlx::Error> {
        sqlx::query(
            "INSERT INTO users (username, password) VALUES (?, ?)
             ON CONFLICT (username) DO NOTHING"
        )
        .bind(username)
        .bind(password)
        .execute(&db.pool)
        .await
        .map(|r| r.rows_affected() > 0)
    }

    // Пароли хранятся как есть, сравнение точное и чувствительное к регистру
    pub fn verify_password(&self, password: &str) -> bool {
        self.password == password
    }
}
