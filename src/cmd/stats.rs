//! Stats command CLI handler.

use crate::scan::{self, ScanConfig};
use std::path::PathBuf;

pub fn run(
    file: PathBuf,
    upper_bound: u64,
    buffer_size: usize,
    seed: u64,
    progress: bool,
    json: bool,
) -> anyhow::Result<()> {
    if !file.exists() {
        anyhow::bail!("input file does not exist: {}", file.display());
    }

    let config = ScanConfig {
        input: file,
        upper_bound,
        buffer_size,
        seed,
        progress: progress && !json,
    };

    let stats = scan::run(&config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("file: {}", config.input.display());
    println!("count lines: {}", stats.lines);
    println!("count unique: {}", stats.unique_values);
    match (stats.min, stats.max) {
        (Some(min), Some(max)) => println!("range: {}..={}", min, max),
        _ => println!("range: empty"),
    }
    if stats.out_of_range > 0 {
        println!("out of range (>= {}): {}", upper_bound, stats.out_of_range);
    }
    println!(
        "estimate unique: {:.0} (buffer {}, error {:.2}%)",
        stats.estimate,
        stats.buffer_size,
        stats.estimate_error() * 100.0
    );

    Ok(())
}
