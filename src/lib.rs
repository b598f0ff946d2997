// src/lib.rs
//! GNSS Bridge Library
//!
//! Reads NMEA position sentences from a serial GNSS receiver and serves
//! the latest fix over a small HTTP API.

pub mod config;
pub mod error;
pub mod gps;
pub mod reader;
pub mod server;

// Re-export main types for convenience
pub use config::BridgeConfig;
pub use error::{BridgeError, Result};
pub use gps::data::Fix;
pub use reader::{FixReader, ReaderConfig};
