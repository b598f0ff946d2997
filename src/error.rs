// src/error.rs
//! Error types for the GNSS bridge

use crate::gps::coords::CoordError;
use std::fmt;

pub type Result<T> = std::result::Result<T, BridgeError>;

#[derive(Debug)]
pub enum BridgeError {
    Io(std::io::Error),
    Serial(tokio_serial::Error),
    Json(serde_json::Error),
    Connection(String),
    Coordinate(CoordError),
    Other(String),
}

impl fmt::Display for BridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BridgeError::Io(e) => write!(f, "IO error: {}", e),
            BridgeError::Serial(e) => write!(f, "Serial error: {}", e),
            BridgeError::Json(e) => write!(f, "JSON error: {}", e),
            BridgeError::Connection(msg) => write!(f, "Connection error: {}", msg),
            BridgeError::Coordinate(e) => write!(f, "Coordinate error: {}", e),
            BridgeError::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for BridgeError {}

impl From<std::io::Error> for BridgeError {
    fn from(error: std::io::Error) -> Self {
        BridgeError::Io(error)
    }
}

impl From<tokio_serial::Error> for BridgeError {
    fn from(error: tokio_serial::Error) -> Self {
        BridgeError::Serial(error)
    }
}

impl From<serde_json::Error> for BridgeError {
    fn from(error: serde_json::Error) -> Self {
        BridgeError::Json(error)
    }
}

impl From<CoordError> for BridgeError {
    fn from(error: CoordError) -> Self {
        BridgeError::Coordinate(error)
    }
}

impl From<anyhow::Error> for BridgeError {
    fn from(error: anyhow::Error) -> Self {
        BridgeError::Other(error.to_string())
    }
}
