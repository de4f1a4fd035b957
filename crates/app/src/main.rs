//! wire-huffman: decode a capture of back-to-back compressed messages.
//!
//! Reads the capture (or generates one), decodes every complete message,
//! writes the decoded bytes out and reports metrics. A trailing incomplete
//! message is left undecoded.

mod config;
mod input_gen;

use config::Config;
use std::fs;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;
use wire_huffman_core::metrics::DecodeMetrics;
use wire_huffman_core::{Decoded, Messages, Result};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!("run with --help for usage");
            std::process::exit(2);
        }
    };

    init_logging(config.verbose);

    if config.print_config {
        config.print();
    }

    match run(&config) {
        Ok(metrics) => {
            if config.print_metrics {
                metrics.print_summary();
            }
        }
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn run(config: &Config) -> Result<DecodeMetrics> {
    let capture = match &config.input_file {
        Some(path) => {
            info!(path = %path.display(), "reading capture");
            fs::read(path)?
        }
        None => {
            info!(seed = config.seed, bytes = config.sample_bytes, "generating capture");
            input_gen::generate_capture(config.seed, config.sample_bytes)
        }
    };

    let (decoded, metrics) = decode_capture(&capture)?;

    fs::write(&config.output_file, &decoded)?;
    info!(
        path = %config.output_file.display(),
        messages = metrics.messages_complete,
        bytes = decoded.len(),
        "wrote decoded messages"
    );

    if let Some(path) = &config.metrics_file {
        fs::write(path, metrics.export_text())?;
        info!(path = %path.display(), "wrote metrics");
    }

    Ok(metrics)
}

/// Decode every complete message at the front of `capture`.
fn decode_capture(capture: &[u8]) -> Result<(Vec<u8>, DecodeMetrics)> {
    let mut metrics = DecodeMetrics::new();
    let mut decoded = Vec::new();
    let mut messages = Messages::new(capture);
    let mut start = 0;

    while let Some(message) = messages.next() {
        let message = message?;
        let consumed = messages.consumed() - start;
        metrics.record(&Decoded::Complete { written: message.len() }, consumed);
        debug!(at = start, consumed, written = message.len(), "message");

        decoded.extend_from_slice(&message);
        start = messages.consumed();
    }

    let pending = messages.remainder().len();
    if pending > 0 {
        metrics.record(&Decoded::Incomplete { written: 0 }, 0);
        warn!(at = start, pending, "capture ends inside a message");
    }

    metrics.complete();
    Ok((decoded, metrics))
}
