//! FormDesk
//!
//! Main application entry point

use anyhow::Context;
use tracing::info;

use FormDesk::{config::Settings, server, utils::logging, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Pick up a local .env before reading configuration
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new().context("Failed to load configuration")?;
    settings.validate()?;

    // Initialize logging; the guard flushes the log file on exit
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", FormDesk::info());
    info!(
        contact = settings.features.contact_form,
        donation = settings.features.donation_form,
        registration = settings.features.registration_form,
        hire = settings.features.hire_form,
        "Forms enabled"
    );
    info!(directory = %settings.uploads.directory, "Photo uploads stored locally");

    let state = AppState::new(settings);
    server::serve(state).await?;

    info!("{} has been shut down.", FormDesk::NAME);
    Ok(())
}
