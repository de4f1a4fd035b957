//! Counters for decode activity.
//!
//! Tracks how many messages were decoded, how many decode attempts ran out of
//! input, and how many bytes went in and came out.
//!
//! # Thread Safety
//!
//! `DecodeMetrics` is a plain struct with no synchronization. Keep it with the
//! buffer being decoded.

use crate::decoder::Decoded;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct DecodeMetrics {
    // === Timing ===
    /// When collection started
    pub start_time: Instant,

    /// When collection ended (set on completion)
    pub end_time: Option<Instant>,

    // === Outcomes ===
    /// Messages decoded up to their end-of-message codeword
    pub messages_complete: u64,

    /// Decode attempts that ran out of input
    pub messages_incomplete: u64,

    // === Bytes ===
    /// Compressed bytes consumed by complete messages
    pub compressed_bytes: u64,

    /// Decoded bytes produced by complete messages
    pub decompressed_bytes: u64,

    /// Size of the longest decoded message
    pub largest_message: u64,
}

impl DecodeMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            end_time: None,
            messages_complete: 0,
            messages_incomplete: 0,
            compressed_bytes: 0,
            decompressed_bytes: 0,
            largest_message: 0,
        }
    }

    /// Record one decode call. `consumed` is how far the source offset moved.
    pub fn record(&mut self, outcome: &Decoded, consumed: usize) {
        match *outcome {
            Decoded::Complete { written } => {
                self.messages_complete += 1;
                self.compressed_bytes += consumed as u64;
                self.decompressed_bytes += written as u64;
                self.largest_message = self.largest_message.max(written as u64);
            }
            Decoded::Incomplete { .. } => self.messages_incomplete += 1,
        }
    }

    /// Mark collection as complete.
    pub fn complete(&mut self) {
        self.end_time = Some(Instant::now());
    }

    /// Get total duration (or current elapsed if not complete).
    pub fn duration(&self) -> Duration {
        match self.end_time {
            Some(end) => end.duration_since(self.start_time),
            None => self.start_time.elapsed(),
        }
    }

    /// Decoded bytes per compressed byte. 0.0 before any message.
    pub fn expansion_ratio(&self) -> f64 {
        if self.compressed_bytes == 0 {
            0.0
        } else {
            self.decompressed_bytes as f64 / self.compressed_bytes as f64
        }
    }

    /// Compressed bytes decoded per second.
    pub fn throughput_bps(&self) -> f64 {
        let duration_secs = self.duration().as_secs_f64();
        if duration_secs == 0.0 {
            0.0
        } else {
            self.compressed_bytes as f64 / duration_secs
        }
    }

    /// Print a human-readable summary to stdout.
    pub fn print_summary(&self) {
        println!("\n=== Decode Summary ===");
        println!("Duration: {} ms", self.duration().as_millis());
        println!();
        println!("Messages complete:   {}", self.messages_complete);
        println!("Messages incomplete: {}", self.messages_incomplete);
        println!("Largest message:     {} bytes", self.largest_message);
        println!();
        println!("Compressed:   {} bytes", self.compressed_bytes);
        println!("Decompressed: {} bytes", self.decompressed_bytes);
        println!("Expansion: {:.2}x", self.expansion_ratio());
        println!("Throughput: {:.2} MB/s", self.throughput_bps() / 1_000_000.0);
        println!();
    }

    /// Export metrics as `key=value` lines.
    pub fn export_text(&self) -> String {
        format!(
            "duration_ms={}\n\
             messages_complete={}\n\
             messages_incomplete={}\n\
             compressed_bytes={}\n\
             decompressed_bytes={}\n\
             largest_message={}\n\
             expansion_ratio={:.4}\n",
            self.duration().as_millis(),
            self.messages_complete,
            self.messages_incomplete,
            self.compressed_bytes,
            self.decompressed_bytes,
            self.largest_message,
            self.expansion_ratio(),
        )
    }
}

impl Default for DecodeMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_outcomes() {
        let mut metrics = DecodeMetrics::new();
        metrics.record(&Decoded::Complete { written: 12 }, 5);
        metrics.record(&Decoded::Complete { written: 3 }, 3);
        metrics.record(&Decoded::Incomplete { written: 7 }, 0);

        assert_eq!(metrics.messages_complete, 2);
        assert_eq!(metrics.messages_incomplete, 1);
        assert_eq!(metrics.compressed_bytes, 8);
        assert_eq!(metrics.decompressed_bytes, 15);
        assert_eq!(metrics.largest_message, 12);
    }

    #[test]
    fn test_expansion_ratio() {
        let mut metrics = DecodeMetrics::new();
        assert_eq!(metrics.expansion_ratio(), 0.0);
        metrics.compressed_bytes = 400;
        metrics.decompressed_bytes = 1000;
        assert_eq!(metrics.expansion_ratio(), 2.5);
    }

    #[test]
    fn test_export_text() {
        let mut metrics = DecodeMetrics::new();
        metrics.record(&Decoded::Complete { written: 10 }, 4);
        metrics.complete();

        let text = metrics.export_text();
        assert!(text.contains("messages_complete=1\n"));
        assert!(text.contains("compressed_bytes=4\n"));
        assert!(text.contains("expansion_ratio=2.5000\n"));
    }
}
