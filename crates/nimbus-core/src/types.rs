use chrono::{NaiveDate, NaiveDateTime};

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// City/country label pair produced by geocoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Place {
    pub city: String,
    pub country: String,
}

impl Place {
    /// Placeholder shown when reverse geocoding fails.
    pub fn fallback() -> Self {
        Self {
            city: "Your Location".to_string(),
            country: String::new(),
        }
    }
}

/// Where a snapshot was taken.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub city: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
}

/// Current conditions as delivered by the forecast source, all metric.
///
/// Temperature, apparent temperature and weather code are always present;
/// everything else may be missing and must degrade gracefully downstream.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    pub temperature: f64,
    pub apparent_temperature: f64,
    pub weather_code: i32,
    pub humidity: Option<f64>,
    pub wind_speed: Option<f64>,
    pub wind_direction: Option<f64>,
    pub pressure: Option<f64>,
    pub cloud_cover: Option<f64>,
    pub visibility: Option<f64>,
    pub dew_point: Option<f64>,
}

/// One day of the daily forecast.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyEntry {
    pub date: NaiveDate,
    pub high: f64,
    pub low: f64,
    pub weather_code: i32,
    pub sunrise: Option<NaiveDateTime>,
    pub sunset: Option<NaiveDateTime>,
}

/// One immutable fetched weather payload for a location.
///
/// Every temperature in here is Celsius regardless of the user's display
/// preference; units are applied at display-model build time and never
/// mutate the snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSnapshot {
    pub current: CurrentConditions,
    pub daily: Vec<DailyEntry>,
    pub location: Location,
}
