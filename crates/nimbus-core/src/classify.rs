//! WMO weather-code interpretation.

use crate::theme::{ParticleStyle, Theme};

/// Display interpretation of a weather code at a given hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherClassification {
    pub symbol: &'static str,
    pub label: &'static str,
    pub theme: Theme,
    pub particle: ParticleStyle,
}

impl WeatherClassification {
    const fn new(
        symbol: &'static str,
        label: &'static str,
        theme: Theme,
        particle: ParticleStyle,
    ) -> Self {
        Self {
            symbol,
            label,
            theme,
            particle,
        }
    }
}

/// Map a WMO weather code and hour of day to a display classification.
///
/// The table is evaluated in order and the first match wins. The night
/// window (before 06:00 or from 20:00) applies only to code 0; every
/// other code reads the same around the clock. Unrecognized codes are
/// valid input and classify as "Unknown" on the clear theme.
///
/// See: https://open-meteo.com/en/docs#weathervariables
pub fn classify(weather_code: i32, hour_of_day: u32) -> WeatherClassification {
    let night = hour_of_day < 6 || hour_of_day >= 20;

    match weather_code {
        0 if night => {
            WeatherClassification::new("🌙", "Clear Night", Theme::Night, ParticleStyle::Default)
        }
        0 => WeatherClassification::new("☀️", "Clear Sky", Theme::Clear, ParticleStyle::Default),
        1 => WeatherClassification::new("🌤️", "Mostly Clear", Theme::Clear, ParticleStyle::Default),
        2 => WeatherClassification::new("⛅", "Partly Cloudy", Theme::Cloudy, ParticleStyle::Default),
        3 => WeatherClassification::new("☁️", "Overcast", Theme::Cloudy, ParticleStyle::Default),
        45 | 48 => WeatherClassification::new("🌫️", "Foggy", Theme::Foggy, ParticleStyle::Default),
        51 | 53 | 55 => {
            WeatherClassification::new("🌦️", "Drizzle", Theme::Rainy, ParticleStyle::Rain)
        }
        61 | 63 | 65 => WeatherClassification::new("🌧️", "Rain", Theme::Rainy, ParticleStyle::Rain),
        66 | 67 => {
            WeatherClassification::new("🌨️", "Freezing Rain", Theme::Snowy, ParticleStyle::Snow)
        }
        71 | 73 | 75 | 77 => {
            WeatherClassification::new("❄️", "Snow", Theme::Snowy, ParticleStyle::Snow)
        }
        80 | 81 | 82 => {
            WeatherClassification::new("🌦️", "Rain Showers", Theme::Rainy, ParticleStyle::Rain)
        }
        85 | 86 => {
            WeatherClassification::new("🌨️", "Snow Showers", Theme::Snowy, ParticleStyle::Snow)
        }
        95 | 96 | 99 => {
            WeatherClassification::new("⛈️", "Thunderstorm", Theme::Stormy, ParticleStyle::Default)
        }
        _ => WeatherClassification::new("🌡️", "Unknown", Theme::Clear, ParticleStyle::Default),
    }
}
