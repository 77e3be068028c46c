//! Generate command CLI handler.

use crate::config::{GeneratorConfig, GeneratorYamlConfig};
use crate::generator::Generator;
use std::path::PathBuf;
use std::time::Instant;

pub fn run(
    seed: Option<u64>,
    output: Option<PathBuf>,
    count: Option<usize>,
    upper_bound: Option<u64>,
    config: Option<PathBuf>,
    progress: bool,
    json: bool,
) -> anyhow::Result<()> {
    let mut gen_config = GeneratorConfig::default();

    if let Some(ref path) = config {
        let yaml = GeneratorYamlConfig::load(path)?;
        gen_config = gen_config.merge_yaml(&yaml);
        if progress {
            eprintln!("Loaded config: {}", path.display());
        }
    }

    if let Some(seed) = seed {
        gen_config.seed = seed;
    }
    if let Some(output) = output {
        gen_config.output_path = output;
    }
    if let Some(count) = count {
        gen_config.count = count;
    }
    if let Some(bound) = upper_bound {
        gen_config.value_upper_bound = bound;
    }

    if progress {
        eprintln!(
            "Generating {} values in [0, {}) with seed {} -> {}",
            gen_config.count,
            gen_config.value_upper_bound,
            gen_config.seed,
            gen_config.output_path.display()
        );
    }

    let start_time = Instant::now();
    let stats = Generator::new(gen_config)
        .with_progress(progress && !json)
        .run()?;

    if progress {
        eprintln!("Done in {:.3?}", start_time.elapsed());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        for line in stats.summary_lines() {
            println!("{}", line);
        }
    }

    Ok(())
}
