//! Консольный слой: меню регистрации/входа и меню бронирования.
//!
//! Меню читают команды построчно из любого `AsyncBufRead` и пишут в любой `Write`,
//! поэтому в тестах сессию можно прогнать по заранее заданному вводу.

pub mod auth;
pub mod bookings;

use std::io::{self, Write};
use std::str::FromStr;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{error, info};

use crate::{error::BookingError, services::BookingCatalog, AppState};

pub struct Console<R, W> {
    input: R,
    out: W,
}

/// Ответ пользователя на числовой запрос.
pub enum Number<T> {
    Value(T),
    Invalid(String),
    Eof,
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    pub fn into_output(self) -> W {
        self.out
    }

    pub fn say(&mut self, line: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.out, "{}", line.as_ref())
    }

    pub fn print(&mut self, text: impl AsRef<str>) -> io::Result<()> {
        write!(self.out, "{}", text.as_ref())?;
        self.out.flush()
    }

    // Выводит ошибку одной строкой; сбои хранилища дополнительно пишем в лог
    pub fn report(&mut self, err: &BookingError) -> io::Result<()> {
        if let BookingError::Persistence(e) = err {
            error!("Storage failure: {:?}", e);
        }
        self.say(format!("Error: {}", err))
    }

    /// Печатает приглашение и читает строку без пробелов по краям. `None` - конец ввода.
    pub async fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        self.print(label)?;
        let mut line = String::new();
        if self.input.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    pub async fn prompt_number<T: FromStr>(&mut self, label: &str) -> io::Result<Number<T>> {
        Ok(match self.prompt(label).await? {
            None => Number::Eof,
            Some(raw) => match raw.parse() {
                Ok(v) => Number::Value(v),
                Err(_) => Number::Invalid(raw),
            },
        })
    }
}

/// Главный цикл: вход -> меню бронирования -> выход из аккаунта -> снова вход.
/// Завершается по команде Exit или по концу ввода.
pub async fn run<R, W>(state: &AppState, console: &mut Console<R, W>) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    loop {
        let Some(user) = auth::auth_menu(&state.credentials, console).await? else {
            break;
        };

        // Каталог пересобирается при каждом входе и подтягивает брони из БД
        let mut catalog = match BookingCatalog::with_default_lineup(state.db.clone()).await {
            Ok(catalog) => catalog,
            Err(e) => {
                console.report(&e)?;
                continue;
            }
        };

        match bookings::booking_menu(&mut catalog, &user, console).await? {
            bookings::MenuExit::Logout => info!("User {} logged out", user.username),
            bookings::MenuExit::Eof => break,
        }
    }

    Ok(())
}
