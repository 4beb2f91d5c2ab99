use thiserror::Error;

/// Errors from the forecast provider.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Weather request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Weather service reported an error: {0}")]
    Service(String),

    #[error("Malformed forecast response: {0}")]
    MalformedResponse(String),
}

/// Errors from forward or reverse geocoding.
#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("City \"{0}\" not found")]
    NotFound(String),

    #[error("Geocoding request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Geocoder returned unusable coordinates: {0}")]
    InvalidCoordinates(String),
}

/// Errors from the current-position lookup.
#[derive(Debug, Error)]
pub enum LocationError {
    #[error("Location access denied")]
    PermissionDenied,

    #[error("No location source available")]
    ServiceUnavailable,

    #[error("Invalid position: {0}")]
    Invalid(String),
}
