use anyhow::{Context, Result};

use nimbus_core::Config;
use nimbus_ui::{ConsoleRenderer, DashboardSession};

#[tokio::main]
async fn main() -> Result<()> {
    nimbus_core::init()?;

    let config = Config::load().context("Failed to load configuration")?;
    let validation = config.validate();
    for warning in &validation.warnings {
        tracing::warn!("Config warning: {}", warning);
    }
    if !validation.is_valid() {
        anyhow::bail!("Invalid config: {}", validation.error_summary());
    }

    let mut session = DashboardSession::new(config, ConsoleRenderer)?;

    // With a city argument, load it directly; otherwise run the normal
    // startup path (current position, then the configured default).
    match std::env::args().nth(1) {
        Some(city) => session.load_city(&city).await,
        None => session.start().await,
    }

    Ok(())
}
