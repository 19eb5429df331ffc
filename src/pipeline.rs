// src/pipeline.rs

use std::path::Path;

use crate::constants::DEFAULT_MAX_DISPLAY_HZ;
use crate::data_analysis::peak_detection::{dominant_frequency, DominantFrequency};
use crate::data_analysis::sample_rate::estimate_sample_rate;
use crate::data_analysis::spectral_analysis::{amplitude_spectrum, Spectrum};
use crate::data_input::csv_parser::parse_csv;
use crate::data_input::sample_data::SampleData;
use crate::error::{AnalysisError, Result};

/// Options recognized by the analysis run.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    /// Upper edge of the displayed frequency range in Hz. Only the spectrum
    /// plot uses it; it never changes the computed spectrum.
    pub max_display_hz: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_display_hz: DEFAULT_MAX_DISPLAY_HZ,
        }
    }
}

impl AnalysisConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.max_display_hz.is_finite() || self.max_display_hz <= 0.0 {
            return Err(AnalysisError::InvalidParameter(format!(
                "max display frequency must be positive and finite, got {}",
                self.max_display_hz
            )));
        }
        Ok(())
    }
}

/// Everything one analysis run produces.
#[derive(Debug, Clone)]
pub struct AnalysisOutput {
    pub sample_rate_hz: f64,
    pub spectrum: Spectrum,
    pub dominant: DominantFrequency,
    /// `max_display_hz` clamped to the highest spectrum bin.
    pub display_max_hz: f64,
}

/// Runs the four stages on raw time/voltage columns.
///
/// Rows with a non-finite value in either column are dropped first, exactly as
/// the CSV loader does.
pub fn analyze(time_sec: &[f64], voltage: &[f64], config: &AnalysisConfig) -> Result<AnalysisOutput> {
    let samples = SampleData::from_columns(time_sec, voltage)?;
    analyze_samples(&samples, config)
}

/// Runs rate estimation, spectral analysis and peak picking on loaded samples.
pub fn analyze_samples(samples: &SampleData, config: &AnalysisConfig) -> Result<AnalysisOutput> {
    config.validate()?;

    let sample_rate_hz = estimate_sample_rate(samples.time_sec())?;
    log::info!("Estimated sample rate: {sample_rate_hz:.2} Hz");

    let spectrum = amplitude_spectrum(samples.voltage(), sample_rate_hz)?;
    let dominant = dominant_frequency(&spectrum)?;
    log::info!(
        "Dominant frequency: {:.2} Hz (amplitude ~ {:.4})",
        dominant.frequency_hz,
        dominant.amplitude
    );

    let display_max_hz = config.max_display_hz.min(spectrum.max_frequency());

    Ok(AnalysisOutput {
        sample_rate_hz,
        spectrum,
        dominant,
        display_max_hz,
    })
}

/// Loads a CSV capture and analyzes it. The loaded samples are returned
/// alongside the result for waveform plotting.
pub fn analyze_file(path: &Path, config: &AnalysisConfig) -> Result<(SampleData, AnalysisOutput)> {
    // Fail on a bad config before touching the file.
    config.validate()?;
    let samples = parse_csv(path)?;
    let output = analyze_samples(&samples, config)?;
    Ok((samples, output))
}


// src/pipeline.rs
