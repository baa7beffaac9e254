//! seat_grid.rs
//!
//! Сетка мест одного зала. В памяти держится копия статусов, источником истины
//! остаётся таблица `seats`: каждая ячейка (hall, row, col) имеет ровно одну строку.
//!
//! Бронирование делается одним условным UPDATE (A -> B), и память меняется только
//! после успешной записи, так что двойная бронь невозможна даже при двух сетках
//! над одним залом.

use std::fmt;
use tracing::{debug, info, warn};

use crate::{
    database::Database,
    error::{BookingError, BookingResult},
    models::{SeatRow, SeatStatus, Show},
};

pub struct SeatGrid {
    db: Database,
    show: Show,
    rows: usize,
    cols: usize,
    seats: Vec<Vec<SeatStatus>>,
}

fn to_index(value: i64, bound: usize) -> Option<usize> {
    usize::try_from(value).ok().filter(|v| *v < bound)
}

impl SeatGrid {
    /// Загружает места зала из БД.
    ///
    /// Если строк для зала нет, все места создаются свободными. Если строк не хватает
    /// (часть сетки потеряна), найденные статусы сохраняются, а недостающие места
    /// дописываются как свободные.
    pub async fn load(db: Database, show: Show, rows: usize, cols: usize) -> BookingResult<Self> {
        let hall = show.hall_number;
        let mut seats = vec![vec![SeatStatus::Available; cols]; rows];
        let mut present = vec![vec![false; cols]; rows];

        let persisted = SeatRow::load_for_hall(hall, &db).await?;
        debug!("Loaded {} seat rows for hall {}", persisted.len(), hall);

        for seat in &persisted {
            let (Some(r), Some(c)) = (to_index(seat.seat_row, rows), to_index(seat.seat_col, cols)) else {
                warn!(
                    "Hall {}: ignoring seat ({}, {}) outside {}x{} grid",
                    hall, seat.seat_row, seat.seat_col, rows, cols
                );
                continue;
            };

            // Неизвестный код не продаём
            let status = SeatStatus::from_code(&seat.status).unwrap_or_else(|| {
                warn!("Hall {}: unknown status {:?} at ({}, {})", hall, seat.status, r, c);
                SeatStatus::Booked
            });
            seats[r][c] = status;
            present[r][c] = true;
        }

        let missing: Vec<(i64, i64)> = present
            .iter()
            .enumerate()
            .flat_map(|(r, row)| {
                row.iter()
                    .enumerate()
                    .filter(|(_, found)| !**found)
                    .map(move |(c, _)| (r as i64, c as i64))
            })
            .collect();

        if !missing.is_empty() {
            let inserted = SeatRow::insert_available(hall, &missing, &db).await?;
            if persisted.is_empty() {
                info!("Initialized {} seats for hall {}", inserted, hall);
            } else {
                warn!("Hall {}: restored {} missing seats as available", hall, inserted);
            }
        }

        Ok(Self { db, show, rows, cols, seats })
    }

    pub fn show(&self) -> &Show {
        &self.show
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn status(&self, row: i64, col: i64) -> Option<SeatStatus> {
        let r = to_index(row, self.rows)?;
        let c = to_index(col, self.cols)?;
        Some(self.seats[r][c])
    }

    pub fn available_count(&self) -> usize {
        self.seats
            .iter()
            .flatten()
            .filter(|s| **s == SeatStatus::Available)
            .count()
    }

    pub fn display(&self) -> String {
        self.to_string()
    }

    /// Бронирует место (row, col), индексация с нуля.
    pub async fn book_seat(&mut self, row: i64, col: i64) -> BookingResult<()> {
        let (Some(r), Some(c)) = (to_index(row, self.rows), to_index(col, self.cols)) else {
            return Err(BookingError::InvalidSeat { row, col });
        };

        if self.seats[r][c] == SeatStatus::Booked {
            return Err(BookingError::AlreadyBooked { row, col });
        }

        let hall = self.show.hall_number;
        if !SeatRow::mark_booked(hall, row, col, &self.db).await? {
            // Место успели занять мимо этой сетки
            warn!("Hall {}: seat ({}, {}) was already booked in storage", hall, row, col);
            self.seats[r][c] = SeatStatus::Booked;
            return Err(BookingError::AlreadyBooked { row, col });
        }

        self.seats[r][c] = SeatStatus::Booked;
        info!("Hall {}: seat ({}, {}) booked", hall, row, col);
        Ok(())
    }
}

impl fmt::Display for SeatGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.show)?;
        write!(f, "    ")?;
        for c in 0..self.cols {
            write!(f, "{:2} ", c + 1)?;
        }
        writeln!(f)?;

        for (r, row) in self.seats.iter().enumerate() {
            write!(f, "Row {:2}: ", r + 1)?;
            for seat in row {
                write!(f, "{}  ", seat)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
