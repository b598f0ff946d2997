// src/main.rs
//! GNSS Bridge - serve the latest position fix from a serial NMEA receiver

use clap::Parser;
use gnss_bridge::{config::BridgeConfig, error::Result, reader, server};

#[derive(Parser, Debug)]
#[command(
    name = "gnss-bridge",
    version,
    about = "Serve the latest GNSS position fix from a serial NMEA receiver over HTTP"
)]
struct Cli {
    /// Serial device the receiver is attached to
    #[arg(short, long)]
    port: Option<String>,

    /// Serial baud rate
    #[arg(short, long)]
    baudrate: Option<u32>,

    /// Address the HTTP server listens on
    #[arg(long)]
    bind: Option<String>,

    /// Per-read timeout in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Sentences to examine per request before giving up
    #[arg(long)]
    max_sentences: Option<usize>,

    /// List available serial ports and exit
    #[arg(long)]
    list_ports: bool,

    /// Persist the merged configuration before starting
    #[arg(long)]
    save_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.list_ports {
        return reader::list_serial_ports();
    }

    let mut config = BridgeConfig::load().unwrap_or_default();

    if let Some(port) = cli.port {
        config.serial_port = port;
    }
    if let Some(baudrate) = cli.baudrate {
        config.baudrate = baudrate;
    }
    if let Some(bind) = cli.bind {
        config.bind_address = bind;
    }
    if let Some(timeout_ms) = cli.timeout_ms {
        config.read_timeout_ms = timeout_ms;
    }
    if let Some(max_sentences) = cli.max_sentences {
        config.max_sentences = max_sentences;
    }

    if cli.save_config {
        config.save()?;
    }

    println!(
        "Reading from {} at {} baud",
        config.serial_port, config.baudrate
    );

    server::run(config).await
}
