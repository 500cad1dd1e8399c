mod config;
mod logging;

use std::env;

use color_eyre::Report;
use envbind::{Binder, EnvSource, TracingDiagnostics};
use tracing::info;

use crate::config::ServerConfig;

fn main() -> Result<(), Report> {
    logging::setup()?;

    // Loads .env into the process environment if present.
    EnvSource::from_dotenv()?;
    let source = env::var("ENVBIND_PREFIX")
        .map(EnvSource::with_prefix)
        .unwrap_or_default();

    let binder = Binder::new(source).with_diagnostics(TracingDiagnostics);

    let mut config = ServerConfig::default();
    binder.bind(&mut config)?;

    info!(
        address = %config.address(),
        workers = config.workers,
        "configuration loaded"
    );

    Ok(())
}
