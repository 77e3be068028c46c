//! Reproducible random integer streams for distinct-count estimation.
//!
//! ```rust,no_run
//! use distinct_gen::{Generator, GeneratorConfig};
//!
//! let stats = Generator::new(GeneratorConfig::default()).run().unwrap();
//! println!("{} lines, {} unique", stats.lines_written, stats.unique_values);
//! ```

pub mod config;
pub mod estimator;
pub mod generator;
pub mod progress;
pub mod scan;
pub mod writer;

pub use config::{GeneratorConfig, GeneratorYamlConfig};
pub use estimator::Cvm;
pub use generator::{GenerateStats, Generator};
pub use scan::{ScanConfig, ScanStats};
pub use writer::RecordWriter;
