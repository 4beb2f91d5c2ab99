//! Forward and reverse geocoding via Nominatim (OpenStreetMap).
//! Free, no API key required; identified by User-Agent per their usage
//! policy.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::instrument;

use crate::error::GeocodeError;
use nimbus_core::{Coordinates, Place};

const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";
const REQUEST_TIMEOUT_SECS: u64 = 10;
const USER_AGENT: &str = "nimbus/0.1.0 (weather dashboard)";

#[derive(Debug, Deserialize)]
struct SearchHit {
    lat: String,
    lon: String,
    name: Option<String>,
    #[serde(default)]
    address: NominatimAddress,
}

#[derive(Debug, Deserialize)]
struct ReverseResponse {
    #[serde(default)]
    address: NominatimAddress,
}

#[derive(Debug, Default, Deserialize)]
struct NominatimAddress {
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
    county: Option<String>,
    country: Option<String>,
}

/// A resolved place name together with its coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodedPlace {
    pub place: Place,
    pub coordinates: Coordinates,
}

#[derive(Debug, Clone)]
pub struct GeocodeClient {
    client: Client,
    base_url: String,
    language: String,
}

impl GeocodeClient {
    /// `language` goes out as the Accept-Language query parameter so
    /// place names come back localized.
    pub fn new(language: &str) -> Result<Self, GeocodeError> {
        Self::new_with_base_url(NOMINATIM_URL.to_string(), language)
    }

    pub fn new_with_base_url(base_url: String, language: &str) -> Result<Self, GeocodeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base_url,
            language: language.to_string(),
        })
    }

    /// Resolve a city name to a place and its coordinates. Only the top
    /// hit is considered.
    #[instrument(skip(self), level = "info")]
    pub async fn search(&self, query: &str) -> Result<GeocodedPlace, GeocodeError> {
        let url = format!("{}/search", self.base_url);
        let hits: Vec<SearchHit> = self
            .client
            .get(&url)
            .query(&[
                ("q", query),
                ("format", "json"),
                ("limit", "1"),
                ("addressdetails", "1"),
                ("accept-language", self.language.as_str()),
            ])
            .send()
            .await?
            .json()
            .await?;

        let hit = hits
            .into_iter()
            .next()
            .ok_or_else(|| GeocodeError::NotFound(query.to_string()))?;

        let latitude: f64 = hit
            .lat
            .parse()
            .map_err(|_| GeocodeError::InvalidCoordinates(hit.lat.clone()))?;
        let longitude: f64 = hit
            .lon
            .parse()
            .map_err(|_| GeocodeError::InvalidCoordinates(hit.lon.clone()))?;

        // Most specific place name wins; the hit's own name is the last
        // resort before echoing the query back.
        let city = hit
            .address
            .city
            .or(hit.address.town)
            .or(hit.address.village)
            .or(hit.address.county)
            .or(hit.name)
            .unwrap_or_else(|| query.to_string());
        let country = hit.address.country.unwrap_or_default();

        Ok(GeocodedPlace {
            place: Place { city, country },
            coordinates: Coordinates {
                latitude,
                longitude,
            },
        })
    }

    /// Resolve coordinates to a place name. Never fails on a thin
    /// address: the terminal fallback city is "Unknown".
    #[instrument(skip(self), level = "info")]
    pub async fn reverse(&self, coordinates: Coordinates) -> Result<Place, GeocodeError> {
        let url = format!("{}/reverse", self.base_url);
        let body: ReverseResponse = self
            .client
            .get(&url)
            .query(&[
                ("lat", coordinates.latitude.to_string()),
                ("lon", coordinates.longitude.to_string()),
                ("format", "json".to_string()),
                ("addressdetails", "1".to_string()),
                ("accept-language", self.language.clone()),
            ])
            .send()
            .await?
            .json()
            .await?;

        let address = body.address;
        let city = address
            .city
            .or(address.town)
            .or(address.village)
            .or(address.county)
            .unwrap_or_else(|| "Unknown".to_string());
        let country = address.country.unwrap_or_default();

        Ok(Place { city, country })
    }
}
