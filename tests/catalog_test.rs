//! Каталог сеансов: порядок, индексы, делегирование в сетку.

mod common;

use movie_booking::{
    models::{SeatRow, SeatStatus, Show},
    services::BookingCatalog,
    BookingError,
};

async fn three_show_catalog() -> BookingCatalog {
    let db = common::test_db().await;
    BookingCatalog::with_default_lineup(db).await.unwrap()
}

#[tokio::test]
async fn lists_shows_in_insertion_order() {
    let catalog = three_show_catalog().await;

    let listed: Vec<String> = catalog
        .list_shows()
        .map(|(i, show)| format!("[{}] {}", i, show))
        .collect();
    assert_eq!(
        listed,
        vec![
            "[0] Hall 1: The Batman at 18:00",
            "[1] Hall 2: Avatar 2 at 20:00",
            "[2] Hall 3: Inception at 21:00",
        ]
    );

    // Обход можно начать заново
    assert_eq!(catalog.list_shows().count(), 3);
    assert_eq!(catalog.len(), 3);
    assert!(!catalog.is_empty());
}

#[tokio::test]
async fn out_of_range_index_is_rejected() {
    let mut catalog = three_show_catalog().await;

    assert!(matches!(catalog.view_seats(99), Err(BookingError::InvalidIndex(99))));
    assert!(matches!(catalog.view_seats(3), Err(BookingError::InvalidIndex(3))));
    assert!(matches!(
        catalog.book_seat(99, 0, 0).await,
        Err(BookingError::InvalidIndex(99))
    ));
}

#[tokio::test]
async fn booking_goes_to_the_selected_hall() {
    let db = common::test_db().await;
    let mut catalog = BookingCatalog::new(db.clone());
    catalog.add_show(Show::new("A", "10:00", 10), 2, 2).await.unwrap();
    catalog.add_show(Show::new("B", "12:00", 11), 3, 3).await.unwrap();

    catalog.book_seat(1, 2, 2).await.unwrap();

    assert_eq!(catalog.grid(1).unwrap().status(2, 2), Some(SeatStatus::Booked));
    assert_eq!(catalog.grid(0).unwrap().available_count(), 4);
    assert_eq!(
        SeatRow::status_of(11, 2, 2, &db).await.unwrap(),
        Some(SeatStatus::Booked)
    );
    assert!(catalog.view_seats(1).unwrap().contains("Row  3: A  A  B"));
}

#[tokio::test]
async fn grid_errors_propagate_unchanged() {
    let mut catalog = three_show_catalog().await;

    catalog.book_seat(0, 1, 1).await.unwrap();
    assert!(matches!(
        catalog.book_seat(0, 1, 1).await,
        Err(BookingError::AlreadyBooked { row: 1, col: 1 })
    ));
    assert!(matches!(
        catalog.book_seat(2, 4, 0).await,
        Err(BookingError::InvalidSeat { row: 4, col: 0 })
    ));
}

#[tokio::test]
async fn default_lineup_creates_all_seats() {
    let db = common::test_db().await;
    let catalog = BookingCatalog::with_default_lineup(db.clone()).await.unwrap();

    assert_eq!(SeatRow::count_for_hall(1, &db).await.unwrap(), 25);
    assert_eq!(SeatRow::count_for_hall(2, &db).await.unwrap(), 36);
    assert_eq!(SeatRow::count_for_hall(3, &db).await.unwrap(), 28);
    assert_eq!(catalog.grid(2).unwrap().cols(), 7);
    assert_eq!(catalog.grid(2).unwrap().rows(), 4);
}
