use anyhow::Context;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use movie_booking::{config::Config, controllers, AppState};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    // Логи в stderr, чтобы не перемешивались с меню
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.app.rust_log))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting movie booking ({})", config.app.environment);

    let state = AppState::new(config).await?;
    info!("Database connected");

    let mut console = controllers::Console::new(BufReader::new(tokio::io::stdin()), std::io::stdout());
    controllers::run(&state, &mut console)
        .await
        .context("Console I/O failed")?;

    state.db.pool.close().await;
    Ok(())
}
