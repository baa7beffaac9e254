pub mod user;
pub mod show;
pub mod seat;

pub use user::Credential;
pub use show::Show;
pub use seat::{SeatRow, SeatStatus};
