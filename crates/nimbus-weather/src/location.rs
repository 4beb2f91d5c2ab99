//! Current-position lookup.
//!
//! There is no positioning hardware to ask in a terminal, so the
//! position comes from the environment: `NIMBUS_LAT` and `NIMBUS_LON`
//! give a fixed position, and `NIMBUS_GEO=denied` simulates a user
//! declining access.

use crate::error::LocationError;
use nimbus_core::Coordinates;

const GEO_ENV: &str = "NIMBUS_GEO";
const LAT_ENV: &str = "NIMBUS_LAT";
const LON_ENV: &str = "NIMBUS_LON";

/// Read the current position from the environment.
pub fn current_position() -> Result<Coordinates, LocationError> {
    position_from(
        std::env::var(GEO_ENV).ok(),
        std::env::var(LAT_ENV).ok(),
        std::env::var(LON_ENV).ok(),
    )
}

fn position_from(
    geo: Option<String>,
    lat: Option<String>,
    lon: Option<String>,
) -> Result<Coordinates, LocationError> {
    if geo.as_deref() == Some("denied") {
        return Err(LocationError::PermissionDenied);
    }

    // Half a pair is a configuration error, not an absent service.
    let (lat, lon) = match (lat, lon) {
        (Some(lat), Some(lon)) => (lat, lon),
        (None, None) => return Err(LocationError::ServiceUnavailable),
        (Some(_), None) => {
            return Err(LocationError::Invalid(format!(
                "{} set without {}",
                LAT_ENV, LON_ENV
            )))
        }
        (None, Some(_)) => {
            return Err(LocationError::Invalid(format!(
                "{} set without {}",
                LON_ENV, LAT_ENV
            )))
        }
    };

    let latitude: f64 = lat
        .parse()
        .map_err(|_| LocationError::Invalid(lat.clone()))?;
    let longitude: f64 = lon
        .parse()
        .map_err(|_| LocationError::Invalid(lon.clone()))?;

    if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
        return Err(LocationError::Invalid(format!(
            "{}, {}",
            latitude, longitude
        )));
    }

    Ok(Coordinates {
        latitude,
        longitude,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn var(value: &str) -> Option<String> {
        Some(value.to_string())
    }

    #[test]
    fn test_position_from_both_coordinates() {
        let position = position_from(None, var("59.9139"), var("10.7522")).unwrap();
        assert_eq!(position.latitude, 59.9139);
        assert_eq!(position.longitude, 10.7522);
    }

    #[test]
    fn test_denied_wins_over_coordinates() {
        let error = position_from(var("denied"), var("59.9139"), var("10.7522")).unwrap_err();
        assert!(matches!(error, LocationError::PermissionDenied));
    }

    #[test]
    fn test_missing_coordinates_is_unavailable() {
        assert!(matches!(
            position_from(None, None, None).unwrap_err(),
            LocationError::ServiceUnavailable
        ));
    }

    #[test]
    fn test_half_set_pair_is_invalid() {
        let error = position_from(None, var("59.9139"), None).unwrap_err();
        assert!(matches!(error, LocationError::Invalid(_)));

        let error = position_from(None, None, var("10.7522")).unwrap_err();
        assert!(matches!(error, LocationError::Invalid(_)));
    }

    #[test]
    fn test_unparsable_coordinates_are_invalid() {
        let error = position_from(None, var("up north"), var("10.7522")).unwrap_err();
        assert!(matches!(error, LocationError::Invalid(_)));
    }

    #[test]
    fn test_out_of_range_coordinates_are_invalid() {
        let error = position_from(None, var("97.0"), var("10.0")).unwrap_err();
        assert!(matches!(error, LocationError::Invalid(_)));

        let error = position_from(None, var("59.0"), var("191.0")).unwrap_err();
        assert!(matches!(error, LocationError::Invalid(_)));
    }
}
