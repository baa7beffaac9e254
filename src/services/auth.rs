use tracing::{info, warn};

use crate::{
    database::Database,
    error::{BookingError, BookingResult},
    models::Credential,
};

/// Аутентифицированный пользователь (без пароля).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub username: String,
}

#[derive(Clone)]
pub struct CredentialStore {
    db: Database,
}

impl CredentialStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Регистрирует пользователя. Проверка уникальности и вставка - один запрос,
    /// поэтому существующая запись никогда не перезаписывается.
    pub async fn register(&self, username: &str, password: &str) -> BookingResult<()> {
        let inserted = Credential::insert_if_absent(username, password, &self.db).await?;
        if !inserted {
            warn!("Registration rejected, username {} is taken", username);
            return Err(BookingError::DuplicateUser(username.to_string()));
        }

        info!("Registered user {}", username);
        Ok(())
    }

    pub async fn login(&self, username: &str, password: &str) -> BookingResult<AuthUser> {
        let credential = Credential::find_by_username(username, &self.db)
            .await?
            .ok_or_else(|| BookingError::UserNotFound(username.to_string()))?;

        if !credential.verify_password(password) {
            warn!("Wrong password for user {}", username);
            return Err(BookingError::WrongPassword);
        }

        info!("User {} logged in", username);
        Ok(AuthUser {
            username: credential.username,
        })
    }

    pub async fn exists(&self, username: &str) -> BookingResult<bool> {
        Ok(Credential::find_by_username(username, &self.db).await?.is_some())
    }
}
