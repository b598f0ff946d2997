// src/gps/data.rs
//! Fix data structure

use serde::{Deserialize, Serialize};

/// A single resolved position report.
///
/// Both coordinates are present together or absent together; the
/// constructors below are the only places a fix is built, which keeps that
/// invariant. `clas_bytes` is the byte length of the sentence the fix came
/// from, zero when nothing was extracted. Serializes to exactly the three
/// fields the HTTP API promises, absent coordinates as `null`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Fix {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub clas_bytes: usize,
}

impl Fix {
    /// Fix with both coordinates resolved.
    pub fn resolved(latitude: f64, longitude: f64, clas_bytes: usize) -> Self {
        Self {
            latitude: Some(latitude),
            longitude: Some(longitude),
            clas_bytes,
        }
    }

    /// Fix from a recognized sentence whose coordinates did not convert.
    pub fn unresolved(clas_bytes: usize) -> Self {
        Self {
            latitude: None,
            longitude: None,
            clas_bytes,
        }
    }

    /// The "no fix yet" sentinel returned when the stream produced nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check if the fix carries a usable position
    pub fn has_fix(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }
}
