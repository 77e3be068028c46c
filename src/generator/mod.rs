//! Random record generator.
//!
//! Draws `count` values uniformly from `[0, upper_bound)` with a seeded
//! ChaCha8 generator, writes them one per line in draw order, and tracks
//! how many distinct values were produced.

use crate::config::GeneratorConfig;
use crate::writer::RecordWriter;
use ahash::AHashSet;
use anyhow::Context;
use indicatif::{ProgressBar, ProgressStyle};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;

/// Update the progress bar every this many records
const PROGRESS_INTERVAL: usize = 4096;
/// Upper limit on the uniqueness set's initial allocation
const MAX_UNIQUE_PREALLOC: usize = 1 << 20;

/// Result of a generator run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateStats {
    /// Where the records were written
    pub output_path: PathBuf,
    /// Number of records written
    pub lines_written: usize,
    /// Number of distinct values among the written records
    pub unique_values: usize,
}

impl GenerateStats {
    /// The summary printed after a successful run.
    pub fn summary_lines(&self) -> [String; 3] {
        [
            format!("generated: {}", self.output_path.display()),
            format!("count lines: {}", self.lines_written),
            format!("count unique: {}", self.unique_values),
        ]
    }
}

pub struct Generator {
    config: GeneratorConfig,
    rng: ChaCha8Rng,
    unique: AHashSet<u32>,
    progress: Option<ProgressBar>,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self {
            unique: AHashSet::with_capacity(unique_capacity_hint(&config)),
            config,
            rng,
            progress: None,
        }
    }

    /// Show a progress bar on stderr while generating.
    pub fn with_progress(mut self, enabled: bool) -> Self {
        if enabled {
            let pb = ProgressBar::new(self.config.count as u64);
            pb.set_style(
                ProgressStyle::with_template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}",
                )
                .unwrap()
                .progress_chars("█▓▒░  ")
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
            );
            pb.set_message("Generating records...");
            self.progress = Some(pb);
        }
        self
    }

    /// Generate into the configured output file.
    pub fn run(mut self) -> anyhow::Result<GenerateStats> {
        self.config.validate()?;

        let path = self.config.output_path.clone();
        let file = RecordWriter::create(&path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        self.write_records(file)
            .with_context(|| format!("failed to write {}", path.display()))
    }

    /// Generate into an arbitrary sink. The reported output path is the
    /// configured one, whether or not `writer` refers to it.
    pub fn generate_to<W: Write>(mut self, writer: W) -> anyhow::Result<GenerateStats> {
        self.config.validate()?;
        Ok(self.write_records(RecordWriter::new(writer))?)
    }

    /// Callers validate the config first.
    fn write_records<W: Write>(&mut self, mut out: RecordWriter<W>) -> io::Result<GenerateStats> {
        let upper = self.config.value_upper_bound;

        for i in 0..self.config.count {
            let value = self.rng.random_range(0..upper) as u32;
            out.write_value(value)?;
            self.unique.insert(value);

            if i % PROGRESS_INTERVAL == 0 {
                if let Some(ref pb) = self.progress {
                    pb.set_position(i as u64);
                }
            }
        }

        let lines_written = out.records_written();
        out.finish()?;

        if let Some(ref pb) = self.progress {
            pb.finish_and_clear();
        }

        Ok(GenerateStats {
            output_path: self.config.output_path.clone(),
            lines_written,
            unique_values: self.unique.len(),
        })
    }
}

/// The set never holds more than `value_upper_bound` entries, whatever
/// `count` is.
fn unique_capacity_hint(config: &GeneratorConfig) -> usize {
    let bound = usize::try_from(config.value_upper_bound).unwrap_or(usize::MAX);
    config.count.min(bound).min(MAX_UNIQUE_PREALLOC)
}
