//! Reads a generated data file back and measures it.
//!
//! Counts lines and distinct values exactly, tracks the value range, and
//! runs the CVM estimator over the same stream so the estimate can be
//! compared against the exact figure.

use crate::config::DEFAULT_UPPER_BOUND;
use crate::estimator::{Cvm, DEFAULT_BUFFER_SIZE};
use crate::progress::{byte_progress_bar, ProgressReader};
use ahash::AHashSet;
use anyhow::Context;
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

const READ_BUFFER_SIZE: usize = 256 * 1024;

/// Configuration for scanning a data file
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Data file to read
    pub input: PathBuf,
    /// Values at or above this are counted as out of range
    pub upper_bound: u64,
    /// CVM buffer size
    pub buffer_size: usize,
    /// Seed for the estimator's priorities
    pub seed: u64,
    /// Show a progress bar
    pub progress: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(crate::config::DEFAULT_OUTPUT),
            upper_bound: DEFAULT_UPPER_BOUND,
            buffer_size: DEFAULT_BUFFER_SIZE,
            seed: crate::config::DEFAULT_SEED,
            progress: false,
        }
    }
}

/// Statistics gathered from a data file
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScanStats {
    pub lines: usize,
    pub unique_values: usize,
    pub min: Option<u32>,
    pub max: Option<u32>,
    pub out_of_range: usize,
    /// CVM estimate of `unique_values`
    pub estimate: f64,
    pub buffer_size: usize,
}

impl ScanStats {
    /// Relative error of the estimate against the exact distinct count.
    pub fn estimate_error(&self) -> f64 {
        if self.unique_values == 0 {
            return 0.0;
        }
        (self.estimate - self.unique_values as f64).abs() / self.unique_values as f64
    }
}

/// Scan the configured file.
pub fn run(config: &ScanConfig) -> anyhow::Result<ScanStats> {
    let file = File::open(&config.input)
        .with_context(|| format!("failed to open {}", config.input.display()))?;
    let file_size = file.metadata()?.len();

    let progress_bar = config
        .progress
        .then(|| byte_progress_bar(file_size, "Scanning records..."));

    let stats = if let Some(ref pb) = progress_bar {
        let pb_clone = pb.clone();
        let reader = ProgressReader::new(file, move |bytes| pb_clone.set_position(bytes));
        scan_reader(BufReader::with_capacity(READ_BUFFER_SIZE, reader), config)
    } else {
        scan_reader(BufReader::with_capacity(READ_BUFFER_SIZE, file), config)
    };

    if let Some(ref pb) = progress_bar {
        pb.finish_and_clear();
    }

    stats.with_context(|| format!("failed to scan {}", config.input.display()))
}

/// Scan records from any buffered reader.
///
/// Every line must be a bare decimal number: ASCII digits only, no sign,
/// no surrounding whitespace, no leading zeros other than `0` itself.
pub fn scan_reader<R: BufRead>(reader: R, config: &ScanConfig) -> anyhow::Result<ScanStats> {
    let mut cvm = Cvm::new(config.buffer_size, config.seed)?;
    let mut unique = AHashSet::new();
    let mut stats = ScanStats {
        buffer_size: config.buffer_size,
        ..Default::default()
    };

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let value = parse_record(&line)
            .with_context(|| format!("line {}: malformed record {:?}", idx + 1, line))?;

        stats.lines += 1;
        if u64::from(value) >= config.upper_bound {
            stats.out_of_range += 1;
        }
        stats.min = Some(stats.min.map_or(value, |m| m.min(value)));
        stats.max = Some(stats.max.map_or(value, |m| m.max(value)));
        unique.insert(value);
        cvm.insert(value);
    }

    stats.unique_values = unique.len();
    stats.estimate = cvm.estimate();
    Ok(stats)
}

fn parse_record(line: &str) -> anyhow::Result<u32> {
    if line.is_empty() {
        anyhow::bail!("empty line");
    }
    if !line.bytes().all(|b| b.is_ascii_digit()) {
        anyhow::bail!("expected only decimal digits");
    }
    if line.len() > 1 && line.starts_with('0') {
        anyhow::bail!("leading zero");
    }
    Ok(line.parse()?)
}
