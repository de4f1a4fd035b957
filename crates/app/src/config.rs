//! Configuration for the wire-huffman tool.
//!
//! Handles parsing command-line arguments and filling in defaults. The tool
//! works with ZERO arguments: it generates a seeded capture, decodes it and
//! prints metrics. The seed is always reported so a run can be repeated.

use std::path::PathBuf;
use wire_huffman_core::{Error, Result};

/// Complete configuration for a decode run.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    // === Files ===
    /// Capture file of back-to-back compressed messages (None = generate)
    pub input_file: Option<PathBuf>,

    /// Where decoded messages are written, concatenated
    pub output_file: PathBuf,

    /// Where `key=value` metrics are written (None = don't write)
    pub metrics_file: Option<PathBuf>,

    // === Generated capture ===
    /// Seed for the generated capture
    pub seed: u64,

    /// Size of the generated capture in bytes
    pub sample_bytes: usize,

    // === Behavior ===
    /// Whether to print the resolved config
    pub print_config: bool,

    /// Whether to print the metrics summary
    pub print_metrics: bool,

    /// Default log level is `debug` instead of `info`
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command-line arguments (without the program name).
    ///
    /// If `--seed` is not given, a time-based seed is used.
    pub fn from_args(args: &[String]) -> Result<Self> {
        let mut input_file: Option<PathBuf> = None;
        let mut output_file: Option<PathBuf> = None;
        let mut metrics_file: Option<PathBuf> = None;
        let mut seed: Option<u64> = None;
        let mut sample_bytes: Option<usize> = None;
        let mut print_config = false;
        let mut print_metrics = true;
        let mut verbose = false;

        let mut args = args.iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--in" => input_file = Some(PathBuf::from(value(&mut args, "--in", "a path")?)),
                "--out" => output_file = Some(PathBuf::from(value(&mut args, "--out", "a path")?)),
                "--metrics-out" => {
                    metrics_file = Some(PathBuf::from(value(&mut args, "--metrics-out", "a path")?))
                }
                "--seed" => {
                    let raw = value(&mut args, "--seed", "a number")?;
                    seed = Some(raw.parse().map_err(|_| invalid("seed", raw))?);
                }
                "--sample-bytes" => {
                    let raw = value(&mut args, "--sample-bytes", "a number")?;
                    sample_bytes = Some(raw.parse().map_err(|_| invalid("sample-bytes", raw))?);
                }
                "--print-config" => print_config = true,
                "--no-metrics" => print_metrics = false,
                "-v" | "--verbose" => verbose = true,
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                other => return Err(Error::Config(format!("unknown argument: {other}"))),
            }
        }

        let seed = seed.unwrap_or_else(|| {
            use std::time::{SystemTime, UNIX_EPOCH};
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });

        Ok(Config {
            input_file,
            output_file: output_file.unwrap_or_else(|| PathBuf::from("./decoded.bin")),
            metrics_file,
            seed,
            sample_bytes: sample_bytes.unwrap_or(65536), // 64 KiB
            print_config,
            print_metrics,
            verbose,
        })
    }

    /// Print the configuration in human-readable form.
    pub fn print(&self) {
        println!("=== Configuration ===");
        match &self.input_file {
            Some(path) => println!("Input file:  {}", path.display()),
            None => println!(
                "Input file:  (generated, {} bytes, seed {})",
                self.sample_bytes, self.seed
            ),
        }
        println!("Output file: {}", self.output_file.display());
        if let Some(path) = &self.metrics_file {
            println!("Metrics:     {}", path.display());
        }
        println!();
    }
}

fn value<'a>(
    args: &mut impl Iterator<Item = &'a String>,
    flag: &str,
    what: &str,
) -> Result<&'a String> {
    args.next()
        .ok_or_else(|| Error::Config(format!("{flag} requires {what}")))
}

fn invalid(name: &str, raw: &str) -> Error {
    Error::Config(format!("invalid {name}: {raw}"))
}

fn print_help() {
    println!("wire-huffman: decode captures of Huffman-compressed wire messages");
    println!();
    println!("USAGE:");
    println!("    wire-huffman [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --in <PATH>            Capture file (default: generate one)");
    println!("    --out <PATH>           Decoded output (default: ./decoded.bin)");
    println!("    --metrics-out <PATH>   Write metrics as key=value lines");
    println!("    --seed <N>             Seed for the generated capture");
    println!("    --sample-bytes <N>     Generated capture size (default: 65536)");
    println!();
    println!("    --print-config         Print resolved configuration");
    println!("    --no-metrics           Don't print metrics summary");
    println!("    -v, --verbose          Log at debug level (RUST_LOG overrides)");
    println!("    --help, -h             Print this help");
    println!();
}
