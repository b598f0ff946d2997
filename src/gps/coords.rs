// src/gps/coords.rs
//! NMEA coordinate field conversion
//!
//! NMEA packs coordinates as degrees and minutes in one number:
//! `4807.038` means 48 degrees 7.038 minutes. Latitude uses two degree
//! digits, longitude three, but the arithmetic is the same for both.

use std::fmt;

/// Coordinate axis; selects which hemisphere indicator negates the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    /// Hemisphere indicator that flips this axis negative.
    fn negative_hemisphere(self) -> &'static str {
        match self {
            Axis::Latitude => "S",
            Axis::Longitude => "W",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Latitude => write!(f, "latitude"),
            Axis::Longitude => write!(f, "longitude"),
        }
    }
}

/// A coordinate field that could not be converted.
///
/// Carries the offending input so callers and tests can report on the
/// failure instead of digging through log output.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordError {
    pub axis: Axis,
    pub field: String,
}

impl fmt::Display for CoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {} field {:?}", self.axis, self.field)
    }
}

impl std::error::Error for CoordError {}

/// Convert one packed `DDMM.MMMM` / `DDDMM.MMMM` field to signed decimal
/// degrees.
///
/// The value is negated only when the hemisphere indicator is exactly `S`
/// (latitude) or `W` (longitude); anything else, including an empty field,
/// leaves it positive. Minutes of 60 or more are accepted and converted
/// as-is, matching the tolerance of the receivers this was written against.
pub fn parse_coordinate(raw: &str, hemisphere: &str, axis: Axis) -> Result<f64, CoordError> {
    let value: f64 = raw.parse().map_err(|_| CoordError {
        axis,
        field: raw.to_string(),
    })?;

    let degrees = (value / 100.0) as i32;
    let minutes = value - (degrees as f64) * 100.0;
    let mut decimal = degrees as f64 + minutes / 60.0;

    if hemisphere == axis.negative_hemisphere() {
        decimal = -decimal;
    }

    Ok(decimal)
}

/// Convert both axes of a position at once.
///
/// Either axis failing fails the whole call, so callers never see a
/// half-converted position.
pub fn parse_position(
    lat: &str,
    lat_hemisphere: &str,
    lon: &str,
    lon_hemisphere: &str,
) -> Result<(f64, f64), CoordError> {
    let latitude = parse_coordinate(lat, lat_hemisphere, Axis::Latitude)?;
    let longitude = parse_coordinate(lon, lon_hemisphere, Axis::Longitude)?;
    Ok((latitude, longitude))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latitude_conversion() {
        let lat = parse_coordinate("4807.038", "N", Axis::Latitude).unwrap();
        assert!((lat - (48.0 + 7.038 / 60.0)).abs() < 1e-9);
        assert!((lat - 48.1173).abs() < 1e-4);
    }

    #[test]
    fn test_longitude_conversion() {
        let lon = parse_coordinate("01131.000", "E", Axis::Longitude).unwrap();
        assert!((lon - (11.0 + 31.0 / 60.0)).abs() < 1e-9);
        assert!((lon - 11.5167).abs() < 1e-4);
    }

    #[test]
    fn test_southern_hemisphere_negates() {
        let lat = parse_coordinate("4807.038", "S", Axis::Latitude).unwrap();
        assert!(lat < 0.0);
        assert!((lat + 48.1173).abs() < 1e-4);
    }

    #[test]
    fn test_western_hemisphere_negates() {
        let lon = parse_coordinate("01131.000", "W", Axis::Longitude).unwrap();
        assert!(lon < 0.0);
        assert!((lon + 11.5167).abs() < 1e-4);
    }

    #[test]
    fn test_unexpected_hemisphere_stays_positive() {
        // W never negates a latitude, S never negates a longitude
        assert!(parse_coordinate("4807.038", "W", Axis::Latitude).unwrap() > 0.0);
        assert!(parse_coordinate("01131.000", "S", Axis::Longitude).unwrap() > 0.0);
        assert!(parse_coordinate("4807.038", "", Axis::Latitude).unwrap() > 0.0);
        assert!(parse_coordinate("4807.038", "s", Axis::Latitude).unwrap() > 0.0);
        assert!(parse_coordinate("4807.038", "?", Axis::Latitude).unwrap() > 0.0);
    }

    #[test]
    fn test_non_numeric_field_is_error() {
        let err = parse_coordinate("48O7.038", "N", Axis::Latitude).unwrap_err();
        assert_eq!(err.axis, Axis::Latitude);
        assert_eq!(err.field, "48O7.038");
    }

    #[test]
    fn test_empty_field_is_error() {
        let err = parse_coordinate("", "N", Axis::Latitude).unwrap_err();
        assert_eq!(err.field, "");
    }

    #[test]
    fn test_out_of_range_minutes_accepted() {
        // 75 minutes is nonsense on the wire but converted as-is
        let lat = parse_coordinate("4675.0", "N", Axis::Latitude).unwrap();
        assert!((lat - (46.0 + 75.0 / 60.0)).abs() < 1e-9);
    }

    #[test]
    fn test_position_fails_as_a_whole() {
        // a bad longitude sinks the latitude with it
        let err = parse_position("4807.038", "N", "bogus", "E").unwrap_err();
        assert_eq!(err.axis, Axis::Longitude);
        assert_eq!(err.field, "bogus");

        let err = parse_position("", "N", "01131.000", "E").unwrap_err();
        assert_eq!(err.axis, Axis::Latitude);
    }

    #[test]
    fn test_position_round_values() {
        let (lat, lon) = parse_position("4807.038", "N", "01131.000", "E").unwrap();
        assert!((lat - 48.1173).abs() < 1e-4);
        assert!((lon - 11.5167).abs() < 1e-4);
    }
}
