use tracing::info;

use crate::{
    database::Database,
    error::{BookingError, BookingResult},
    models::Show,
    services::seat_grid::SeatGrid,
};

pub struct CatalogEntry {
    pub show: Show,
    pub grid: SeatGrid,
}

/// Упорядоченный список сеансов текущей сессии. Индексы с нуля, в порядке добавления.
pub struct BookingCatalog {
    db: Database,
    entries: Vec<CatalogEntry>,
}

impl BookingCatalog {
    pub fn new(db: Database) -> Self {
        Self { db, entries: Vec::new() }
    }

    // Афиша по умолчанию: (сеанс, рядов, мест в ряду)
    pub fn default_lineup() -> Vec<(Show, usize, usize)> {
        vec![
            (Show::new("The Batman", "18:00", 1), 5, 5),
            (Show::new("Avatar 2", "20:00", 2), 6, 6),
            (Show::new("Inception", "21:00", 3), 4, 7),
        ]
    }

    pub async fn with_default_lineup(db: Database) -> BookingResult<Self> {
        let mut catalog = Self::new(db);
        for (show, rows, cols) in Self::default_lineup() {
            catalog.add_show(show, rows, cols).await?;
        }
        info!("Catalog ready with {} shows", catalog.len());
        Ok(catalog)
    }

    pub async fn add_show(&mut self, show: Show, rows: usize, cols: usize) -> BookingResult<()> {
        let grid = SeatGrid::load(self.db.clone(), show.clone(), rows, cols).await?;
        self.entries.push(CatalogEntry { show, grid });
        Ok(())
    }

    /// Ленивый список (индекс, сеанс). Каждый вызов начинает обход заново.
    pub fn list_shows(&self) -> impl Iterator<Item = (usize, &Show)> + '_ {
        self.entries.iter().map(|e| &e.show).enumerate()
    }

    pub fn view_seats(&self, index: usize) -> BookingResult<String> {
        self.entries
            .get(index)
            .map(|e| e.grid.display())
            .ok_or(BookingError::InvalidIndex(index))
    }

    pub async fn book_seat(&mut self, index: usize, row: i64, col: i64) -> BookingResult<()> {
        let entry = self
            .entries
            .get_mut(index)
            .ok_or(BookingError::InvalidIndex(index))?;
        entry.grid.book_seat(row, col).await
    }

    pub fn grid(&self, index: usize) -> Option<&SeatGrid> {
        self.entries.get(index).map(|e| &e.grid)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
