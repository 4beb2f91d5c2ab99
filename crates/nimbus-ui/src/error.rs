//! Session-level error type and its user-facing messages.

use thiserror::Error;

use nimbus_weather::{GeocodeError, LocationError, WeatherError};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("No city name given")]
    EmptyQuery,

    #[error("Geocoding failed: {0}")]
    Geocode(#[from] GeocodeError),

    #[error("Forecast fetch failed: {0}")]
    Weather(#[from] WeatherError),

    #[error("Position lookup failed: {0}")]
    Location(#[from] LocationError),
}

impl SessionError {
    /// User-friendly message for the notification area. These are the
    /// texts users actually see, so they stay stable.
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyQuery => "Please enter a city name.".to_string(),
            Self::Geocode(GeocodeError::NotFound(query)) => {
                format!("City \"{}\" not found. Try a different name.", query)
            }
            Self::Geocode(_) => "Network error. Check your connection.".to_string(),
            Self::Weather(_) => "Failed to fetch weather data. Please try again.".to_string(),
            Self::Location(_) => "Location access denied. Please search manually.".to_string(),
        }
    }
}
