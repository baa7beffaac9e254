use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

use crate::database::Database;

/// Состояние места. В БД хранится однобуквенным кодом: 'A' свободно, 'B' забронировано.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeatStatus {
    Available,
    Booked,
}

impl SeatStatus {
    pub fn code(self) -> &'static str {
        match self {
            SeatStatus::Available => "A",
            SeatStatus::Booked => "B",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.chars().next() {
            Some('A') => Some(SeatStatus::Available),
            Some('B') => Some(SeatStatus::Booked),
            _ => None,
        }
    }
}

impl fmt::Display for SeatStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SeatRow {
    pub hall_number: i64,
    pub seat_row: i64,
    pub seat_col: i64,
    pub status: String,
}

impl SeatRow {
    pub async fn load_for_hall(hall_number: i64, db: &Database) -> Result<Vec<SeatRow>, sqlx::Error> {
        sqlx::query_as::<_, SeatRow>(
            "SELECT hall_number, seat_row, seat_col, status
             FROM seats
             WHERE hall_number = ?
             ORDER BY seat_row, seat_col"
        )
        .bind(hall_number)
        .fetch_all(&db.pool)
        .await
    }

    /// Вставляет недостающие места как свободные одной транзакцией.
    /// Уже существующие строки не трогает. Возвращает число вставленных строк.
    pub async fn insert_available(
        hall_number: i64,
        cells: &[(i64, i64)],
        db: &Database,
    ) -> Result<u64, sqlx::Error> {
        let mut tx = db.pool.begin().await?;
        let mut inserted = 0;

        for &(row, col) in cells {
            let result = sqlx::query(
                "INSERT INTO seats (hall_number, seat_row, seat_col, status)
                 VALUES (?, ?, ?, 'A')
                 ON CONFLICT (hall_number, seat_row, seat_col) DO NOTHING"
            )
            .bind(hall_number)
            .bind(row)
            .bind(col)
            .execute(&mut *tx)
            .await?;
            inserted += result.rows_affected();
        }

        tx.commit().await?;
        Ok(inserted)
    }

    /// Compare-and-set A -> B. false, если место уже занято (или строки нет).
    pub async fn mark_booked(hall_number: i64, row: i64, col: i64, db: &Database) -> Result<bool, sqlx::Error> {
        sqlx::query(
            "UPDATE seats
             SET status = 'B'
             WHERE hall_number = ? AND seat_row = ? AND seat_col = ? AND status = 'A'"
        )
        .bind(hall_number)
        .bind(row)
        .bind(col)
        .execute(&db.pool)
        .await
        .map(|r| r.rows_affected() > 0)
    }

    pub async fn count_for_hall(hall_number: i64, db: &Database) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM seats WHERE hall_number = ?"
        )
        .bind(hall_number)
        .fetch_one(&db.pool)
        .await
    }

    pub async fn status_of(hall_number: i64, row: i64, col: i64, db: &Database) -> Result<Option<SeatStatus>, sqlx::Error> {
        let code = sqlx::query_scalar::<_, String>(
            "SELECT status FROM seats WHERE hall_number = ? AND seat_row = ? AND seat_col = ?"
        )
        .bind(hall_number)
        .bind(row)
        .bind(col)
        .fetch_optional(&db.pool)
        .await?;

        Ok(code.as_deref().and_then(SeatStatus::from_code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(SeatStatus::from_code("A"), Some(SeatStatus::Available));
        assert_eq!(SeatStatus::from_code("B"), Some(SeatStatus::Booked));
        assert_eq!(SeatStatus::from_code(""), None);
        assert_eq!(SeatStatus::from_code("x"), None);
        assert_eq!(SeatStatus::Booked.to_string(), "B");
    }
}
