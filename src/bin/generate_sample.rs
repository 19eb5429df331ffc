// src/bin/generate_sample.rs

use std::error::Error;
use std::path::PathBuf;

use scope_analyzer::constants::DEFAULT_INPUT_FILE;
use scope_analyzer::sample_generator::{generate, write_csv, GeneratorConfig};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let output_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_FILE));

    let config = GeneratorConfig::default();
    let samples = generate(&config)?;
    write_csv(&output_path, &samples)?;

    println!("Created {}", output_path.display());
    println!("  - {} data points", samples.len());
    println!("  - {} seconds of data", config.duration_s);
    println!("  - {} Hz sine wave", config.frequency_hz);
    Ok(())
}
