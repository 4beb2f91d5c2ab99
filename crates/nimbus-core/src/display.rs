//! Render-ready view model derived from a snapshot and a unit preference.

use chrono::NaiveDateTime;

use crate::classify::{classify, WeatherClassification};
use crate::types::{DailyEntry, WeatherSnapshot};
use crate::units::{to_display_temperature, UnitPreference};

const COMPASS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];
const RANGE_FLOOR: f64 = 10.0;
const RANGE_CEILING: f64 = 100.0;
const RANGE_MIDPOINT: f64 = 50.0;
const SUN_TIME_FORMAT: &str = "%I:%M %p";
const ABSENT: &str = "—";

/// One row of the forecast strip.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastEntry {
    pub weekday: String,
    pub symbol: &'static str,
    pub high: i32,
    pub low: i32,
}

/// Fully converted and formatted view of one snapshot.
///
/// A pure function of `(snapshot, unit, hour)`, rebuilt wholesale on every
/// snapshot update or unit toggle. Optional snapshot fields stay optional
/// here so the sink can render placeholders instead of failing.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayModel {
    pub city: String,
    pub country: String,
    pub unit: UnitPreference,
    pub temperature: i32,
    pub feels_like: i32,
    pub today_high: Option<i32>,
    pub today_low: Option<i32>,
    pub dew_point: Option<i32>,
    pub humidity: Option<f64>,
    pub wind_speed: Option<i32>,
    pub wind_compass: Option<&'static str>,
    pub visibility: Option<String>,
    pub pressure: Option<i32>,
    pub cloud_cover: Option<f64>,
    pub sunrise: String,
    pub sunset: String,
    pub range_position: f64,
    pub classification: WeatherClassification,
    pub forecast: Vec<ForecastEntry>,
}

/// Build the display model for `snapshot` in `unit`.
///
/// `hour` is the injected local hour of day feeding the day/night branch
/// of classification. Forecast rows reuse the same hour: time of day is
/// irrelevant for future days.
pub fn build_display_model(
    snapshot: &WeatherSnapshot,
    unit: UnitPreference,
    hour: u32,
) -> DisplayModel {
    let current = &snapshot.current;
    let today = snapshot.daily.first();

    DisplayModel {
        city: snapshot.location.city.clone(),
        country: snapshot.location.country.clone(),
        unit,
        temperature: to_display_temperature(current.temperature, unit),
        feels_like: to_display_temperature(current.apparent_temperature, unit),
        today_high: today.map(|day| to_display_temperature(day.high, unit)),
        today_low: today.map(|day| to_display_temperature(day.low, unit)),
        dew_point: current.dew_point.map(|dew| to_display_temperature(dew, unit)),
        humidity: current.humidity,
        wind_speed: current.wind_speed.map(|speed| speed.round() as i32),
        wind_compass: current.wind_direction.map(compass_label),
        visibility: current.visibility.map(format_visibility),
        pressure: current.pressure.map(|hpa| hpa.round() as i32),
        cloud_cover: current.cloud_cover,
        sunrise: format_sun_time(today.and_then(|day| day.sunrise)),
        sunset: format_sun_time(today.and_then(|day| day.sunset)),
        range_position: range_position(current.temperature, today),
        classification: classify(current.weather_code, hour),
        forecast: forecast_rows(snapshot, unit, hour),
    }
}

/// Position of the current temperature between today's low and high, in
/// percent. Floored at 10 so the indicator never looks empty, capped at
/// 100; the midpoint stands in when the range is degenerate or today is
/// missing.
fn range_position(current_celsius: f64, today: Option<&DailyEntry>) -> f64 {
    let position = match today {
        Some(day) if day.high - day.low > 0.0 => {
            (current_celsius - day.low) / (day.high - day.low) * 100.0
        }
        _ => RANGE_MIDPOINT,
    };
    position.clamp(RANGE_FLOOR, RANGE_CEILING)
}

fn compass_label(degrees: f64) -> &'static str {
    let index = ((degrees / 45.0).round() as i64).rem_euclid(8) as usize;
    COMPASS[index]
}

fn format_visibility(meters: f64) -> String {
    if meters >= 1000.0 {
        format!("{:.1} km", meters / 1000.0)
    } else {
        format!("{} m", meters)
    }
}

fn format_sun_time(time: Option<NaiveDateTime>) -> String {
    match time {
        Some(time) => time.format(SUN_TIME_FORMAT).to_string(),
        None => ABSENT.to_string(),
    }
}

/// Forecast rows for daily indices 1 through 5. Index 0 is today and is
/// skipped; indices past the end of the data are skipped too, so the
/// strip may legitimately hold fewer than five rows.
fn forecast_rows(snapshot: &WeatherSnapshot, unit: UnitPreference, hour: u32) -> Vec<ForecastEntry> {
    let mut rows = Vec::new();
    for index in 1..=5 {
        if let Some(day) = snapshot.daily.get(index) {
            rows.push(ForecastEntry {
                weekday: day.date.format("%a").to_string(),
                symbol: classify(day.weather_code, hour).symbol,
                high: to_display_temperature(day.high, unit),
                low: to_display_temperature(day.low, unit),
            });
        }
    }
    rows
}
