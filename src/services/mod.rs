pub mod auth;
pub mod catalog;
pub mod seat_grid;

pub use auth::{AuthUser, CredentialStore};
pub use catalog::{BookingCatalog, CatalogEntry};
pub use seat_grid::SeatGrid;
