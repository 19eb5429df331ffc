// src/sample_generator.rs

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, StandardNormal};
use std::error::Error;
use std::f64::consts::PI;
use std::path::Path;

use crate::constants::{
    CSV_HEADER_TIME, CSV_HEADER_VOLTAGE, GENERATOR_AMPLITUDE, GENERATOR_DURATION_S,
    GENERATOR_FREQUENCY_HZ, GENERATOR_NOISE_LEVEL, GENERATOR_SAMPLE_RATE_HZ,
};
use crate::data_input::sample_data::SampleData;

/// Settings for a synthetic noisy sine capture.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub sample_rate: f64,
    pub duration_s: f64,
    pub frequency_hz: f64,
    pub amplitude: f64,
    /// Standard deviation of the added Gaussian noise, in volts.
    pub noise_level: f64,
    /// Fixed seed for reproducible noise; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            sample_rate: GENERATOR_SAMPLE_RATE_HZ,
            duration_s: GENERATOR_DURATION_S,
            frequency_hz: GENERATOR_FREQUENCY_HZ,
            amplitude: GENERATOR_AMPLITUDE,
            noise_level: GENERATOR_NOISE_LEVEL,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    pub fn num_samples(&self) -> usize {
        (self.duration_s * self.sample_rate).round().max(0.0) as usize
    }
}

/// Generates `A sin(2π f t) + noise` sampled at `t = i / fs`.
pub fn generate(config: &GeneratorConfig) -> Result<SampleData, Box<dyn Error>> {
    if !(config.sample_rate.is_finite() && config.sample_rate > 0.0) {
        return Err(format!("sample rate must be positive, got {}", config.sample_rate).into());
    }
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let n = config.num_samples();
    let time: Vec<f64> = (0..n).map(|i| i as f64 / config.sample_rate).collect();
    let voltage: Vec<f64> = time
        .iter()
        .map(|&t| {
            let clean = config.amplitude * (2.0 * PI * config.frequency_hz * t).sin();
            if config.noise_level > 0.0 {
                let z: f64 = StandardNormal.sample(&mut rng);
                clean + config.noise_level * z
            } else {
                clean
            }
        })
        .collect();

    Ok(SampleData::from_columns(&time, &voltage)?)
}

/// Writes samples as a `time,voltage` CSV table.
pub fn write_csv(path: &Path, samples: &SampleData) -> Result<(), Box<dyn Error>> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([CSV_HEADER_TIME, CSV_HEADER_VOLTAGE])?;
    for (t, v) in samples.points() {
        writer.write_record([t.to_string(), v.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}


// src/sample_generator.rs
