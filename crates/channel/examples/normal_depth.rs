//! Solves the normal depth of a trapezoidal channel.
//!
//! Per-iteration progress is written to stderr through the `log` facade, and
//! the converged depth to stdout.
//!
//! ```text
//! cargo run -p sluice-channel --example normal_depth
//! ```

use log::{LevelFilter, Metadata, Record};
use sluice_channel::{ChannelParameters, Config, normal_depth_observed};
use sluice_observers::LogObserver;

// Input parameters.
const DISCHARGE: f64 = 15.5; // m³/s
const BOTTOM_WIDTH: f64 = 5.1; // m
const LEFT_SLOPE: f64 = 2.5;
const RIGHT_SLOPE: f64 = 2.5;
const MANNING_N: f64 = 1.0 / 20.0;
const BED_SLOPE: f64 = 0.005;
const INITIAL_DEPTH: f64 = 0.01; // m

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    log::set_logger(&LOGGER).map_err(|err| err.to_string())?;
    log::set_max_level(LevelFilter::Debug);

    let params = ChannelParameters::new(
        DISCHARGE,
        BOTTOM_WIDTH,
        LEFT_SLOPE,
        RIGHT_SLOPE,
        MANNING_N,
        BED_SLOPE,
    )?;

    // One precision for both the tolerance and the derivative step.
    let config = Config::coupled(INITIAL_DEPTH / 10.0)?;

    let solved = normal_depth_observed(&params, INITIAL_DEPTH, &config, LogObserver::new())?;

    println!("Iterated water depth = {:.3}", solved.depth);
    Ok(())
}
