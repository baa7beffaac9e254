use std::io::{self, Write};
use tokio::io::AsyncBufRead;
use tracing::debug;

use super::{Console, Number};
use crate::services::{AuthUser, BookingCatalog};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuExit {
    Logout,
    Eof,
}

/* ---------- helpers ---------- */

// Индекс сеанса: отрицательный или нечисловой ввод считаем неверным индексом
async fn read_show_index<R, W>(console: &mut Console<R, W>) -> io::Result<Option<Option<usize>>>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    Ok(match console.prompt_number::<usize>("Enter show index: ").await? {
        Number::Value(v) => Some(Some(v)),
        Number::Invalid(_) => Some(None),
        Number::Eof => None,
    })
}

async fn read_coordinate<R, W>(console: &mut Console<R, W>, label: &str) -> io::Result<Option<Option<i64>>>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    Ok(match console.prompt_number::<i64>(label).await? {
        Number::Value(v) => Some(Some(v)),
        Number::Invalid(_) => Some(None),
        Number::Eof => None,
    })
}

/* ---------- menu ---------- */

pub async fn booking_menu<R, W>(
    catalog: &mut BookingCatalog,
    user: &AuthUser,
    console: &mut Console<R, W>,
) -> io::Result<MenuExit>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    loop {
        console.say("")?;
        console.say("--- Movie Booking System ---")?;
        console.say("[1] View Shows")?;
        console.say("[2] View Seats for Show")?;
        console.say("[3] Book Seat")?;
        console.say("[0] Logout")?;

        let option = match console.prompt_number::<u32>("Choose option: ").await? {
            Number::Value(v) => v,
            Number::Invalid(_) => {
                console.say("Invalid option.")?;
                continue;
            }
            Number::Eof => return Ok(MenuExit::Eof),
        };

        match option {
            1 => {
                for (index, show) in catalog.list_shows() {
                    console.say(format!("[{}] {}", index, show))?;
                }
            }
            2 => {
                let Some(index) = read_show_index(console).await? else {
                    return Ok(MenuExit::Eof);
                };
                let Some(index) = index else {
                    console.say("Invalid show index.")?;
                    continue;
                };
                match catalog.view_seats(index) {
                    Ok(grid) => console.print(grid)?,
                    Err(e) => console.say(e.to_string())?,
                }
            }
            3 => {
                let Some(index) = read_show_index(console).await? else {
                    return Ok(MenuExit::Eof);
                };
                let Some(row) = read_coordinate(console, "Enter row number (starting from 1): ").await? else {
                    return Ok(MenuExit::Eof);
                };
                let Some(col) = read_coordinate(console, "Enter column number (starting from 1): ").await? else {
                    return Ok(MenuExit::Eof);
                };

                let Some(index) = index else {
                    console.say("Error: Invalid show index.")?;
                    continue;
                };
                let (Some(row), Some(col)) = (row, col) else {
                    console.say("Error: Invalid seat.")?;
                    continue;
                };

                // Пользователь вводит ряд и место с единицы
                debug!("{} books show {} seat ({}, {})", user.username, index, row, col);
                match catalog.book_seat(index, row.saturating_sub(1), col.saturating_sub(1)).await {
                    Ok(()) => console.say("Seat booked successfully!")?,
                    Err(e) => console.report(&e)?,
                }
            }
            0 => {
                console.say("Logging out...")?;
                return Ok(MenuExit::Logout);
            }
            _ => console.say("Invalid option.")?,
        }
    }
}
