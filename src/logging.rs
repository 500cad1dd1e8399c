use color_eyre::Report;
use tracing_subscriber::EnvFilter;

/// Installs the error report handler and a `fmt` subscriber filtered by
/// `RUST_LOG` (default `info`).
pub fn setup() -> Result<(), Report> {
    color_eyre::install()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(Report::msg)?;

    Ok(())
}
