use market_axum::start_server;
use market_sqlite::Db;
use marketd::{AppConfig, Cli};
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // By convention, we leverage `tracing` to instrument and log various
    // operations throughout this project. Accordingly, we subscribe to these
    // events so we can write them to stdio.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse CLI args, then layer the configuration sources
    let cli = Cli::import()?;
    let AppConfig { server, database } = AppConfig::load(&cli)?;

    // Open the database (applying any pending migrations) and serve requests
    let db = Db::open(&database).await?;
    start_server(server, db).await?;

    Ok(())
}
