use dotenvy::dotenv;
use northwind_console::{
    config::{database, settings},
    console::Console,
    core::seed,
    errors::Result,
    session::Session,
};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Load .env file first so RUST_LOG and DATABASE_URL can come from it
    dotenv().ok(); // Make it non-fatal, env vars can be set externally

    // 2. Initialize tracing. Logs go to stderr so they stay out of the menu.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();
    info!("Attempted to load .env file.");

    // 3. Load the application configuration
    let app_config = settings::load_app_configuration()
        .inspect_err(|e| error!("Critical error loading application configuration: {}", e))?;

    // 4. Open the one connection the session keeps for its lifetime
    let database_url = database::get_database_url();
    database::ensure_sqlite_directory(&database_url)?;
    let db = database::create_connection(&database_url)
        .await
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
    database::create_tables(&db)
        .await
        .inspect(|_| info!("Database initialized successfully."))
        .inspect_err(|e| error!("Failed to initialize database: {}", e))?;

    // 5. Seed reference data listed in the configuration
    seed::seed_reference_data(&db, &app_config)
        .await
        .inspect_err(|e| error!("Failed to seed reference data: {}", e))?;

    // 6. Run the interactive session on the terminal
    let console = Console::new(
        io::stdin().lock(),
        io::stdout(),
        app_config.console.clear_screen,
    );
    let mut session = Session::new(db, console);
    session.run().await
}
