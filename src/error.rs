use thiserror::Error;

/// Ошибки ядра бронирования. Все они восстановимы на уровне меню.
#[derive(Debug, Error)]
pub enum BookingError {
    #[error("Username already exists.")]
    DuplicateUser(String),

    #[error("Username not found.")]
    UserNotFound(String),

    #[error("Incorrect password.")]
    WrongPassword,

    #[error("Invalid show index.")]
    InvalidIndex(usize),

    #[error("Invalid seat.")]
    InvalidSeat { row: i64, col: i64 },

    #[error("Seat already booked. Please try another seat.")]
    AlreadyBooked { row: i64, col: i64 },

    #[error("Storage error: {0}")]
    Persistence(#[from] sqlx::Error),
}

pub type BookingResult<T> = Result<T, BookingError>;
