//! sonarviz - serial sonar to visualization marker bridge daemon
//!
//! Samples a distance sensor over a serial link on a fixed cadence,
//! classifies each reading, and unicasts a marker descriptor to the
//! configured consumer. Runs with sensing disabled (warnings only) if
//! the device cannot be opened at startup.

use sonarviz::config::AppConfig;
use sonarviz::error::{Error, Result};
use sonarviz::scheduler::PublishScheduler;
use sonarviz::streaming::{Serializer, UdpMarkerPublisher};
use sonarviz::transport::{SerialTransport, Transport};
use std::env;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Instant;

/// Seconds between statistics log lines
const STATS_INTERVAL_SECS: u64 = 10;

/// Parse config path from command line arguments.
///
/// Supports:
/// - `sonarviz <path>` (positional)
/// - `sonarviz --config <path>` (flag-based)
/// - `sonarviz -c <path>` (short flag)
///
/// Defaults to `/etc/sonarviz.toml` if not specified.
fn parse_config_path() -> String {
    let args: Vec<String> = env::args().collect();

    // Look for --config or -c flag
    for i in 1..args.len() {
        if (args[i] == "--config" || args[i] == "-c") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }

    // Fall back to first positional argument (if it doesn't start with -)
    if args.len() > 1 && !args[1].starts_with('-') {
        return args[1].clone();
    }

    // Default path
    "/etc/sonarviz.toml".to_string()
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("sonarviz v0.1.0 starting...");

    let config_path = parse_config_path();
    log::info!("Using config: {}", config_path);
    let config = AppConfig::from_file(&config_path)?;

    let serializer = Serializer::new(config.publish.format);
    let publisher = UdpMarkerPublisher::new(&config.publish.target_address, serializer)?;

    // A failed open leaves the channel disabled for the process
    // lifetime; the daemon keeps ticking and warns each tick.
    let link: Option<Box<dyn Transport>> = match SerialTransport::open(&config.serial) {
        Ok(transport) => Some(Box::new(transport)),
        Err(e) => {
            log::error!("{}; continuing with sensing disabled", e);
            None
        }
    };

    let mut scheduler = PublishScheduler::new(link, config.marker.clone(), Box::new(publisher));

    // Set up shutdown signal handler
    let running = Arc::new(AtomicBool::new(true));
    let r = Arc::clone(&running);

    ctrlc::set_handler(move || {
        log::info!("Received shutdown signal");
        r.store(false, Ordering::Relaxed);
    })
    .map_err(|e| Error::Other(format!("Error setting Ctrl-C handler: {}", e)))?;

    let period = config.publish.period();
    log::info!(
        "Publishing markers every {} ms to {}",
        config.publish.period_ms,
        config.publish.target_address
    );
    log::info!("sonarviz running. Press Ctrl-C to stop.");

    let mut last_stats = Instant::now();

    while running.load(Ordering::Relaxed) {
        scheduler.tick();

        if last_stats.elapsed().as_secs() >= STATS_INTERVAL_SECS {
            log_statistics(&scheduler);
            last_stats = Instant::now();
        }

        thread::sleep(period);
    }

    log_statistics(&scheduler);
    log::info!("sonarviz stopped");
    Ok(())
}

/// Log a one-line sampling summary
fn log_statistics(scheduler: &PublishScheduler) {
    let stats = scheduler.stats();
    if stats.valid() > 0 {
        log::info!(
            "Samples: {} total, {} valid, {} dropped; distance {:.1} +/- {:.1} cm",
            stats.ticks(),
            stats.valid(),
            stats.invalid(),
            stats.mean(),
            stats.stddev()
        );
    } else {
        log::info!(
            "Samples: {} total, 0 valid, {} dropped",
            stats.ticks(),
            stats.invalid()
        );
    }
}
