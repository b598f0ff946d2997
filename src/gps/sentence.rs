// src/gps/sentence.rs
//! NMEA sentence classification and fix extraction

use super::coords::{self, CoordError};
use super::data::Fix;

/// Position sentences the reader recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentenceKind {
    /// GGA fix data; coordinates start at field 2.
    Gga,
    /// RMC minimum navigation data; a leading status field shifts the
    /// coordinates to field 3.
    Rmc,
}

impl SentenceKind {
    /// Index of the latitude field after splitting on commas. The
    /// hemisphere and longitude fields follow in order.
    fn first_coordinate_field(self) -> usize {
        match self {
            SentenceKind::Gga => 2,
            SentenceKind::Rmc => 3,
        }
    }
}

/// Why a line produced no fix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Not one of the recognized position sentence prefixes.
    UnknownSentence,
    /// Recognized prefix but too few comma-delimited fields.
    TooFewFields { count: usize },
}

/// Outcome of examining one raw line.
#[derive(Debug, Clone, PartialEq)]
pub enum Scan {
    /// A recognized position sentence with both coordinates converted.
    Fix(Fix),
    /// A recognized position sentence whose coordinate fields failed to
    /// convert. The fix carries absent coordinates but still counts the
    /// sentence bytes.
    Invalid { fix: Fix, error: CoordError },
    /// Not a position sentence; keep reading.
    Skip(SkipReason),
}

/// Fields a position sentence must have after splitting on commas.
const MIN_FIELDS: usize = 10;

/// Classify a raw line by its sentence prefix.
///
/// Multi-constellation receivers emit `GN` talker sentences where older
/// GPS-only units emit `GP`; both are accepted.
pub fn classify(line: &str) -> Option<SentenceKind> {
    if line.starts_with("$GPGGA") || line.starts_with("$GNGGA") {
        Some(SentenceKind::Gga)
    } else if line.starts_with("$GPRMC") || line.starts_with("$GNRMC") {
        Some(SentenceKind::Rmc)
    } else {
        None
    }
}

/// Examine one line and extract a fix if it is a recognized position
/// sentence.
///
/// A matched sentence always ends the scan, even when its coordinate
/// fields are empty or garbled; in that case the returned fix has absent
/// coordinates and the conversion error rides along for diagnostics.
pub fn scan_line(line: &str) -> Scan {
    let kind = match classify(line) {
        Some(kind) => kind,
        None => return Scan::Skip(SkipReason::UnknownSentence),
    };

    let parts: Vec<&str> = line.split(',').collect();
    if parts.len() < MIN_FIELDS {
        return Scan::Skip(SkipReason::TooFewFields { count: parts.len() });
    }

    let first = kind.first_coordinate_field();
    match coords::parse_position(parts[first], parts[first + 1], parts[first + 2], parts[first + 3]) {
        Ok((latitude, longitude)) => Scan::Fix(Fix::resolved(latitude, longitude, line.len())),
        Err(error) => Scan::Invalid {
            fix: Fix::unresolved(line.len()),
            error,
        },
    }
}
