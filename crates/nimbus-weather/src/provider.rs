//! Forecast client for the Open-Meteo API. Free, no API key required.

use std::time::Duration;

use reqwest::Client;
use tracing::instrument;

use crate::error::WeatherError;
use crate::types::{ForecastBundle, ForecastResponse};
use nimbus_core::Coordinates;

const OPEN_METEO_URL: &str = "https://api.open-meteo.com";
const REQUEST_TIMEOUT_SECS: u64 = 10;
const FORECAST_DAYS: u32 = 6;

const CURRENT_FIELDS: &str = "temperature_2m,relative_humidity_2m,apparent_temperature,\
    weather_code,wind_speed_10m,wind_direction_10m,surface_pressure,cloud_cover,\
    visibility,dew_point_2m";
const DAILY_FIELDS: &str = "temperature_2m_max,temperature_2m_min,weather_code,sunrise,sunset";

#[derive(Debug, Clone)]
pub struct WeatherProvider {
    client: Client,
    base_url: String,
}

impl WeatherProvider {
    pub fn new() -> Result<Self, WeatherError> {
        Self::new_with_base_url(OPEN_METEO_URL.to_string())
    }

    /// Build a provider against a specific base URL. Tests point this at
    /// a local mock server.
    pub fn new_with_base_url(base_url: String) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Fetch current conditions plus today and the five days after it.
    ///
    /// Temperatures come back in Celsius; conversion happens at display
    /// time. Failures reported in the response body take precedence over
    /// the HTTP status.
    #[instrument(skip(self), level = "info")]
    pub async fn fetch_forecast(
        &self,
        coordinates: Coordinates,
    ) -> Result<ForecastBundle, WeatherError> {
        let url = format!("{}/v1/forecast", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("latitude", coordinates.latitude.to_string()),
                ("longitude", coordinates.longitude.to_string()),
                ("current", CURRENT_FIELDS.to_string()),
                ("daily", DAILY_FIELDS.to_string()),
                ("timezone", "auto".to_string()),
                ("forecast_days", FORECAST_DAYS.to_string()),
            ])
            .send()
            .await?;

        let body: ForecastResponse = response.json().await?;
        body.into_bundle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn forecast_body() -> serde_json::Value {
        json!({
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
                "time": ["2026-02-16", "2026-02-17", "2026-02-18"],
                "weather_code": [2, 61, 3],
                "temperature_2m_max": [31.0, 29.5, 30.2],
                "temperature_2m_min": [24.0, 23.1, 23.8],
                "sunrise": ["2026-02-16T06:32", "2026-02-17T06:32", "2026-02-18T06:31"],
                "sunset": ["2026-02-16T18:11", "2026-02-17T18:11", "2026-02-18T18:12"]
            }
        })
    }

    #[tokio::test]
    async fn test_fetch_forecast_sends_expected_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .and(query_param("latitude", "13.0837"))
            .and(query_param("longitude", "80.2702"))
            .and(query_param("timezone", "auto"))
            .and(query_param("forecast_days", "6"))
            .and(query_param(
                "daily",
                "temperature_2m_max,temperature_2m_min,weather_code,sunrise,sunset",
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
            .expect(1)
            .mount(&server)
            .await;

        let provider = WeatherProvider::new_with_base_url(server.uri()).unwrap();
        let bundle = provider
            .fetch_forecast(Coordinates {
                latitude: 13.0837,
                longitude: 80.2702,
            })
            .await
            .unwrap();

        assert_eq!(bundle.current.weather_code, 2);
        assert_eq!(bundle.current.temperature, 28.4);
        assert_eq!(bundle.daily.len(), 3);
        assert_eq!(bundle.timezone, "Asia/Kolkata");
    }

    #[tokio::test]
    async fn test_body_error_flag_beats_http_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "error": true,
                "reason": "Latitude must be in range of -90 to 90"
            })))
            .mount(&server)
            .await;

        let provider = WeatherProvider::new_with_base_url(server.uri()).unwrap();
        let error = provider
            .fetch_forecast(Coordinates {
                latitude: 13.0837,
                longitude: 80.2702,
            })
            .await
            .unwrap_err();

        match error {
            WeatherError::Service(reason) => {
                assert!(reason.contains("Latitude must be in range"));
            }
            other => panic!("expected Service, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_http_400_with_error_body_reports_the_reason() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": true,
                "reason": "Parameter 'longitude' is missing"
            })))
            .mount(&server)
            .await;

        let provider = WeatherProvider::new_with_base_url(server.uri()).unwrap();
        let error = provider
            .fetch_forecast(Coordinates {
                latitude: 0.0,
                longitude: 0.0,
            })
            .await
            .unwrap_err();

        assert!(matches!(error, WeatherError::Service(_)));
    }

    #[tokio::test]
    async fn test_response_without_blocks_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"timezone": "UTC"})))
            .mount(&server)
            .await;

        let provider = WeatherProvider::new_with_base_url(server.uri()).unwrap();
        let error = provider
            .fetch_forecast(Coordinates {
                latitude: 13.0837,
                longitude: 80.2702,
            })
            .await
            .unwrap_err();

        assert!(matches!(error, WeatherError::MalformedResponse(_)));
    }
}
