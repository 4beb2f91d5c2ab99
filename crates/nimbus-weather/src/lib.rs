//! Network-facing side of the Nimbus dashboard: the Open-Meteo forecast
//! provider, Nominatim geocoding, and the current-position lookup.

pub mod error;
pub mod geocode;
pub mod location;
pub mod provider;
pub mod types;

pub use error::{GeocodeError, LocationError, WeatherError};
pub use geocode::{GeocodeClient, GeocodedPlace};
pub use location::current_position;
pub use provider::WeatherProvider;
pub use types::ForecastBundle;
