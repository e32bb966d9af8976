use acct_server::{AppState, Config, build_router, logger};

use std::error::Error;

use log::info;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = Config::from_env()?;

    // Initialize logger (before any other logging)
    logger::initialize(config.log_level, config.log_colored)?;

    info!("Starting acct-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Open the account database and run migrations
    info!(
        "Connecting to database: {}",
        config.database_path.display()
    );
    let pool = acct_db::connect(&config.database_path).await?;
    info!("Database connection established, migrations applied");

    let state = AppState::new(pool, &config);
    let app = build_router(state);

    let listener = TcpListener::bind(config.bind_addr).await?;
    info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
