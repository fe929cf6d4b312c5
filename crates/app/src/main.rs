//! Population Viewer - Main Entry Point
//!
//! Loads the state population worksheet, then opens the window. Any failure
//! before the event loop starts ends the process without showing a window.

use std::rc::Rc;

use popview_application::{LoadPopulation, LoadPopulationInput};
use popview_domain::PopulationCatalog;
use popview_infrastructure::{CalamineSpreadsheetSource, SettingsRepository};
use popview_ui::AppWindow;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Population Viewer v{}", env!("CARGO_PKG_VERSION"));

    let settings = SettingsRepository::new()
        .load()
        .inspect_err(|e| error!(error = %e, "failed to load settings"))?;

    let input = LoadPopulationInput::from(&settings.dataset);
    let output = LoadPopulation::new(CalamineSpreadsheetSource::new())
        .execute(&input)
        .inspect_err(|e| error!(error = %e, "failed to load population data"))?;
    let catalog = PopulationCatalog::new(output.records);
    if catalog.is_empty() {
        warn!("no state-level rows found, the list will be empty");
    }
    info!(states = catalog.len(), "opening window");

    let app = AppWindow::new(Rc::new(catalog), &settings.window)?;

    // Blocks until the window is closed
    app.run()?;

    Ok(())
}
