//! Wire types for the Open-Meteo forecast endpoint and their conversion
//! into the domain model.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;

use crate::error::WeatherError;
use nimbus_core::{CurrentConditions, DailyEntry};

/// Raw forecast response. Open-Meteo signals failure in the body with an
/// `error` flag and a `reason`, regardless of HTTP status, so every field
/// that a failure response omits is optional here.
#[derive(Debug, Deserialize)]
pub(crate) struct ForecastResponse {
    #[serde(default)]
    pub error: bool,
    pub reason: Option<String>,
    pub timezone: Option<String>,
    pub current: Option<CurrentBlock>,
    pub daily: Option<DailyBlock>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CurrentBlock {
    pub temperature_2m: Option<f64>,
    pub apparent_temperature: Option<f64>,
    pub weather_code: Option<i32>,
    pub relative_humidity_2m: Option<f64>,
    pub wind_speed_10m: Option<f64>,
    pub wind_direction_10m: Option<f64>,
    pub surface_pressure: Option<f64>,
    pub cloud_cover: Option<f64>,
    pub visibility: Option<f64>,
    pub dew_point_2m: Option<f64>,
}

/// The daily block arrives as parallel arrays indexed by day.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct DailyBlock {
    #[serde(default)]
    pub time: Vec<NaiveDate>,
    #[serde(default)]
    pub weather_code: Vec<i32>,
    #[serde(default)]
    pub temperature_2m_max: Vec<f64>,
    #[serde(default)]
    pub temperature_2m_min: Vec<f64>,
    #[serde(default)]
    pub sunrise: Vec<String>,
    #[serde(default)]
    pub sunset: Vec<String>,
}

/// Everything one forecast request yields, already in domain terms.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastBundle {
    pub current: CurrentConditions,
    pub daily: Vec<DailyEntry>,
    pub timezone: String,
}

impl ForecastResponse {
    pub(crate) fn into_bundle(self) -> Result<ForecastBundle, WeatherError> {
        if self.error {
            let reason = self
                .reason
                .unwrap_or_else(|| "unspecified error".to_string());
            return Err(WeatherError::Service(reason));
        }

        let current = self
            .current
            .ok_or_else(|| WeatherError::MalformedResponse("missing current block".to_string()))?
            .into_conditions()?;
        let daily = self
            .daily
            .ok_or_else(|| WeatherError::MalformedResponse("missing daily block".to_string()))?
            .daily_entries();

        Ok(ForecastBundle {
            current,
            daily,
            timezone: self.timezone.unwrap_or_default(),
        })
    }
}

impl CurrentBlock {
    /// Temperature, apparent temperature and the weather code are the
    /// floor for a usable dashboard; everything else degrades to a
    /// placeholder downstream.
    fn into_conditions(self) -> Result<CurrentConditions, WeatherError> {
        let temperature = self.temperature_2m.ok_or_else(|| {
            WeatherError::MalformedResponse("current block is missing temperature_2m".to_string())
        })?;
        let apparent_temperature = self.apparent_temperature.ok_or_else(|| {
            WeatherError::MalformedResponse(
                "current block is missing apparent_temperature".to_string(),
            )
        })?;
        let weather_code = self.weather_code.ok_or_else(|| {
            WeatherError::MalformedResponse("current block is missing weather_code".to_string())
        })?;

        Ok(CurrentConditions {
            temperature,
            apparent_temperature,
            weather_code,
            humidity: self.relative_humidity_2m,
            wind_speed: self.wind_speed_10m,
            wind_direction: self.wind_direction_10m,
            pressure: self.surface_pressure,
            cloud_cover: self.cloud_cover,
            visibility: self.visibility,
            dew_point: self.dew_point_2m,
        })
    }
}

impl DailyBlock {
    /// Pair up the parallel arrays. A day missing its code or either
    /// temperature is dropped; missing sun times only cost the times.
    pub(crate) fn daily_entries(&self) -> Vec<DailyEntry> {
        let mut entries = Vec::new();
        for (index, date) in self.time.iter().enumerate() {
            let code = self.weather_code.get(index);
            let high = self.temperature_2m_max.get(index);
            let low = self.temperature_2m_min.get(index);
            if let (Some(&weather_code), Some(&high), Some(&low)) = (code, high, low) {
                entries.push(DailyEntry {
                    date: *date,
                    high,
                    low,
                    weather_code,
                    sunrise: parse_sun_time(self.sunrise.get(index)),
                    sunset: parse_sun_time(self.sunset.get(index)),
                });
            }
        }
        entries
    }
}

/// Open-Meteo emits local ISO 8601 stamps without seconds. Accept both
/// with and without, and treat anything else as absent.
fn parse_sun_time(raw: Option<&String>) -> Option<NaiveDateTime> {
    let raw = raw?;
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_response() -> &'static str {
        r#"{
            "timezone": "Asia/Kolkata",
            "current": {
                "temperature_2m": 28.4,
                "relative_humidity_2m": 70.0,
                "apparent_temperature": 31.2,
                "weather_code": 2,
                "wind_speed_10m": 11.4,
                "wind_direction_10m": 230.0,
                "surface_pressure": 1005.6,
                "cloud_cover": 40.0,
                "visibility": 15000.0,
                "dew_point_2m": 22.1
            },
            "daily": {
                "time": ["2026-02-16", "2026-02-17"],
                "weather_code": [2, 61],
                "temperature_2m_max": [31.0, 29.5],
                "temperature_2m_min": [24.0, 23.1],
                "sunrise": ["2026-02-16T06:32", "2026-02-17T06:32"],
                "sunset": ["2026-02-16T18:11", "2026-02-17T18:11"]
            }
        }"#
    }

    #[test]
    fn test_full_response_converts_to_bundle() {
        let response: ForecastResponse = serde_json::from_str(full_response()).unwrap();
        let bundle = response.into_bundle().unwrap();

        assert_eq!(bundle.timezone, "Asia/Kolkata");
        assert_eq!(bundle.current.temperature, 28.4);
        assert_eq!(bundle.current.weather_code, 2);
        assert_eq!(bundle.current.humidity, Some(70.0));
        assert_eq!(bundle.daily.len(), 2);
        assert_eq!(bundle.daily[0].date.to_string(), "2026-02-16");
        assert_eq!(bundle.daily[0].high, 31.0);
        assert_eq!(
            bundle.daily[0].sunrise.map(|t| t.to_string()),
            Some("2026-02-16 06:32:00".to_string())
        );
    }

    #[test]
    fn test_error_flag_wins_even_with_other_fields_present() {
        let raw = r#"{"error": true, "reason": "Latitude must be in range", "timezone": "UTC"}"#;
        let response: ForecastResponse = serde_json::from_str(raw).unwrap();

        let error = response.into_bundle().unwrap_err();
        match error {
            WeatherError::Service(reason) => assert_eq!(reason, "Latitude must be in range"),
            other => panic!("expected Service, got {other:?}"),
        }
    }

    #[test]
    fn test_error_flag_without_reason() {
        let raw = r#"{"error": true}"#;
        let response: ForecastResponse = serde_json::from_str(raw).unwrap();

        let error = response.into_bundle().unwrap_err();
        assert!(error.to_string().contains("unspecified error"));
    }

    #[test]
    fn test_missing_blocks_are_malformed() {
        let raw = r#"{"timezone": "UTC"}"#;
        let response: ForecastResponse = serde_json::from_str(raw).unwrap();
        let error = response.into_bundle().unwrap_err();
        assert!(matches!(error, WeatherError::MalformedResponse(_)));
    }

    #[test]
    fn test_missing_core_current_field_is_malformed() {
        let raw = r#"{
            "current": {"temperature_2m": 20.0, "weather_code": 0},
            "daily": {"time": [], "weather_code": [], "temperature_2m_max": [], "temperature_2m_min": []}
        }"#;
        let response: ForecastResponse = serde_json::from_str(raw).unwrap();

        let error = response.into_bundle().unwrap_err();
        assert!(error.to_string().contains("apparent_temperature"));
    }

    #[test]
    fn test_ragged_daily_arrays_drop_incomplete_days() {
        let block = DailyBlock {
            time: vec![
                "2026-02-16".parse().unwrap(),
                "2026-02-17".parse().unwrap(),
                "2026-02-18".parse().unwrap(),
            ],
            weather_code: vec![2, 61],
            temperature_2m_max: vec![31.0, 29.5, 28.0],
            temperature_2m_min: vec![24.0],
            sunrise: Vec::new(),
            sunset: Vec::new(),
        };

        let entries = block.daily_entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].date.to_string(), "2026-02-16");
        assert_eq!(entries[0].sunrise, None);
        assert_eq!(entries[0].sunset, None);
    }

    #[test]
    fn test_sun_time_parsing_accepts_both_precisions() {
        let with_seconds = "2026-02-16T06:32:15".to_string();
        let without = "2026-02-16T06:32".to_string();
        let garbage = "6:32 in the morning".to_string();

        assert!(parse_sun_time(Some(&with_seconds)).is_some());
        assert!(parse_sun_time(Some(&without)).is_some());
        assert_eq!(parse_sun_time(Some(&garbage)), None);
        assert_eq!(parse_sun_time(None), None);
    }
}
