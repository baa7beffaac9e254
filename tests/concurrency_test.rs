//! Гонки: две сетки над одним залом и двойная регистрация.
//!
//! Запросы к БД условные (A -> B, insert-if-absent), поэтому из двух
//! одновременных попыток проходит ровно одна.

mod common;

use movie_booking::{
    models::{Credential, SeatRow, SeatStatus},
    services::{CredentialStore, SeatGrid},
    BookingError,
};

#[tokio::test]
async fn same_seat_is_booked_only_once() {
    let db = common::test_db().await;
    let mut first = SeatGrid::load(db.clone(), common::show(1), 5, 5).await.unwrap();
    let mut second = SeatGrid::load(db.clone(), common::show(1), 5, 5).await.unwrap();

    let (a, b) = tokio::join!(first.book_seat(2, 2), second.book_seat(2, 2));

    let successes = [a.is_ok(), b.is_ok()].iter().filter(|ok| **ok).count();
    assert_eq!(successes, 1);
    let loser = if a.is_ok() { b } else { a };
    assert!(matches!(loser, Err(BookingError::AlreadyBooked { row: 2, col: 2 })));

    // Проигравшая сетка тоже видит место занятым
    assert_eq!(first.status(2, 2), Some(SeatStatus::Booked));
    assert_eq!(second.status(2, 2), Some(SeatStatus::Booked));
    assert_eq!(
        SeatRow::status_of(1, 2, 2, &db).await.unwrap(),
        Some(SeatStatus::Booked)
    );
    assert_eq!(SeatRow::count_for_hall(1, &db).await.unwrap(), 25);
}

#[tokio::test]
async fn stale_grid_cannot_double_book() {
    let db = common::test_db().await;
    let mut stale = SeatGrid::load(db.clone(), common::show(4), 2, 2).await.unwrap();
    let mut fresh = SeatGrid::load(db.clone(), common::show(4), 2, 2).await.unwrap();

    fresh.book_seat(0, 1).await.unwrap();

    assert_eq!(stale.status(0, 1), Some(SeatStatus::Available));
    assert!(matches!(
        stale.book_seat(0, 1).await,
        Err(BookingError::AlreadyBooked { row: 0, col: 1 })
    ));
    assert_eq!(stale.status(0, 1), Some(SeatStatus::Booked));
}

#[tokio::test]
async fn concurrent_registration_keeps_one_credential() {
    let db = common::test_db().await;
    let store = CredentialStore::new(db.clone());

    let (a, b) = tokio::join!(store.register("alice", "one"), store.register("alice", "two"));

    assert_eq!([a.is_ok(), b.is_ok()].iter().filter(|ok| **ok).count(), 1);
    let winner = if a.is_ok() { "one" } else { "two" };
    let loser = if a.is_ok() { b } else { a };
    assert!(matches!(loser, Err(BookingError::DuplicateUser(_))));

    let stored = Credential::find_by_username("alice", &db).await.unwrap().unwrap();
    assert_eq!(stored.password, winner);
}
