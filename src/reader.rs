// src/reader.rs
//! Serial fix acquisition
//!
//! Opens the receiver's serial port, scans the sentence stream for the
//! first usable position sentence and hands back a `Fix`. Every failure
//! mode collapses to the empty fix at this boundary; callers never have
//! to handle a serial error.

use crate::{
    error::{BridgeError, Result},
    gps::{
        data::Fix,
        sentence::{self, Scan},
    },
};
use chrono::Utc;
use std::time::Duration;
use tokio::{
    io::{AsyncBufReadExt, AsyncRead, BufReader},
    time::timeout,
};
use tokio_serial::SerialPortBuilderExt;

/// Connection parameters for one read session.
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    pub port: String,
    pub baudrate: u32,
    /// Bound on every single line read.
    pub read_timeout: Duration,
    /// Sentences to examine before giving up on the session.
    pub max_sentences: usize,
}

/// Reads the next position fix from a serial NMEA stream.
///
/// Each `read_fix` call opens a fresh session and holds no state across
/// calls, so any number of readers can run concurrently.
pub struct FixReader {
    config: ReaderConfig,
}

impl FixReader {
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Read until a position sentence yields a fix.
    ///
    /// Never fails: port-open errors, read errors, timeouts and attempt
    /// exhaustion all collapse to `Fix::empty()`.
    pub async fn read_fix(&self) -> Fix {
        match self.try_read_fix().await {
            Ok(fix) => fix,
            Err(e) => {
                log_line(&format!("serial read failed: {}", e));
                Fix::empty()
            }
        }
    }

    async fn try_read_fix(&self) -> Result<Fix> {
        let serial = tokio_serial::new(&self.config.port, self.config.baudrate)
            .timeout(self.config.read_timeout)
            .open_native_async()
            .map_err(|e| {
                BridgeError::Connection(format!(
                    "failed to open serial port {}: {}",
                    self.config.port, e
                ))
            })?;

        scan_stream(serial, self.config.max_sentences, self.config.read_timeout).await
    }
}

/// Scan up to `max_sentences` lines from `stream` for a position sentence.
///
/// Lines are read as raw bytes and decoded lossily so a receiver glitch
/// cannot abort the scan. Returns the empty fix when the stream ends, a
/// read times out or the sentence budget runs out.
pub async fn scan_stream<R>(stream: R, max_sentences: usize, read_timeout: Duration) -> Result<Fix>
where
    R: AsyncRead + Unpin,
{
    let mut reader = BufReader::new(stream);
    let mut buf = Vec::new();

    for _ in 0..max_sentences {
        buf.clear();
        let n = match timeout(read_timeout, reader.read_until(b'\n', &mut buf)).await {
            Ok(result) => result?,
            Err(_) => {
                log_line("read timed out waiting for a sentence");
                return Ok(Fix::empty());
            }
        };
        if n == 0 {
            break; // EOF
        }

        let decoded = String::from_utf8_lossy(&buf);
        let line = decoded.trim();
        if line.is_empty() {
            continue;
        }

        match sentence::scan_line(line) {
            Scan::Fix(fix) => return Ok(fix),
            Scan::Invalid { fix, error } => {
                log_line(&format!("position sentence rejected: {}", error));
                return Ok(fix);
            }
            Scan::Skip(_) => {}
        }
    }

    Ok(Fix::empty())
}

/// List available serial ports
pub fn list_serial_ports() -> Result<()> {
    let ports = tokio_serial::available_ports()
        .map_err(|e| BridgeError::Other(format!("failed to list serial ports: {}", e)))?;

    if ports.is_empty() {
        println!("No serial ports found.");
    } else {
        println!("Available serial ports:");
        for port in ports {
            println!("  {} - {:?}", port.port_name, port.port_type);
        }
    }

    Ok(())
}

/// Timestamped stderr diagnostic.
pub(crate) fn log_line(msg: &str) {
    eprintln!("[{}] {}", Utc::now().format("%Y-%m-%d %H:%M:%S%.3fZ"), msg);
}
