use std::io::{self, Write};
use tokio::io::AsyncBufRead;

use super::{Console, Number};
use crate::services::{AuthUser, CredentialStore};

async fn read_credentials<R, W>(console: &mut Console<R, W>) -> io::Result<Option<(String, String)>>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let Some(username) = console.prompt("Enter username: ").await? else {
        return Ok(None);
    };
    let Some(password) = console.prompt("Enter password: ").await? else {
        return Ok(None);
    };
    Ok(Some((username, password)))
}

/// Меню регистрации и входа. `Some(user)` после успешного входа,
/// `None` при выборе Exit или конце ввода.
pub async fn auth_menu<R, W>(
    store: &CredentialStore,
    console: &mut Console<R, W>,
) -> io::Result<Option<AuthUser>>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    loop {
        console.say("")?;
        console.say("--- Login & Registration System ---")?;
        console.say("[1] Register")?;
        console.say("[2] Login")?;
        console.say("[0] Exit")?;

        let choice = match console.prompt_number::<u32>("Choose option: ").await? {
            Number::Value(v) => v,
            Number::Invalid(_) => {
                console.say("Invalid choice.")?;
                continue;
            }
            Number::Eof => return Ok(None),
        };

        match choice {
            1 => {
                let Some((username, password)) = read_credentials(console).await? else {
                    return Ok(None);
                };
                match store.register(&username, &password).await {
                    Ok(()) => console.say("Registration successful! Please login.")?,
                    Err(e) => console.report(&e)?,
                }
            }
            2 => {
                let Some((username, password)) = read_credentials(console).await? else {
                    return Ok(None);
                };
                match store.login(&username, &password).await {
                    Ok(user) => {
                        console.say(format!("Welcome {}!", user.username))?;
                        return Ok(Some(user));
                    }
                    Err(e) => console.report(&e)?,
                }
            }
            0 => {
                console.say("Goodbye!")?;
                return Ok(None);
            }
            _ => console.say("Invalid choice.")?,
        }
    }
}
