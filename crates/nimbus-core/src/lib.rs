//! Core weather interpretation and presentation logic for the Nimbus
//! dashboard.
//!
//! Everything in this crate is pure and synchronous: WMO code
//! classification, theme and particle styling, unit conversion, the
//! display model builder, and the persisted configuration. Network
//! access lives in `nimbus-weather`; orchestration in `nimbus-ui`.

use anyhow::Result;

pub mod classify;
pub mod config;
pub mod display;
pub mod theme;
pub mod types;
pub mod units;

pub use classify::{classify, WeatherClassification};
pub use config::{Config, ConfigError, ConfigValidationError, ValidationResult};
pub use display::{build_display_model, DisplayModel, ForecastEntry};
pub use theme::{BackgroundSpec, ParticleConfig, ParticleStyle, Rgba, Theme};
pub use types::{
    Coordinates, CurrentConditions, DailyEntry, Location, Place, WeatherSnapshot,
};
pub use units::{to_display_temperature, UnitPreference};

/// Initialize tracing for the whole application. Call once at startup.
pub fn init() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Nimbus core initialized");
    Ok(())
}
