use dotenvy::dotenv;
use grocery_platform::{
    config,
    core::delivery::RngPicker,
    errors::Result,
    session::Session,
};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // 1. Load .env first so RUST_LOG and GROCERY_CONFIG can come from it
    dotenv().ok(); // Make it non-fatal, env vars can be set externally

    // 2. Initialize tracing on stderr; stdout carries the shopping dialogue
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    // 3. Load the catalog, delivery slots, and partners
    let app_config = config::load_app_configuration()?;
    info!(
        categories = app_config.catalog.categories().len(),
        slots = app_config.delivery_slots.len(),
        partners = app_config.delivery_partners.len(),
        "Configuration loaded"
    );

    // 4. Run one shopping session on the console
    let stdin = io::stdin();
    let mut session = Session::new(
        &app_config,
        stdin.lock(),
        io::stdout().lock(),
        RngPicker::thread_local(),
    );
    session
        .run()
        .inspect(|order| info!(total = order.running_total(), "Session complete"))
        .inspect_err(|e| error!("Session ended without checkout: {}", e))?;

    Ok(())
}
