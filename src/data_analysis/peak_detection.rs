// src/data_analysis/peak_detection.rs

use crate::data_analysis::spectral_analysis::Spectrum;
use crate::error::{AnalysisError, Result};

/// The strongest non-DC bin of a spectrum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DominantFrequency {
    pub bin: usize,
    pub frequency_hz: f64,
    pub amplitude: f64,
}

/// Finds the bin with the largest amplitude, ignoring the DC bin at index 0.
///
/// Ties resolve to the lowest frequency.
pub fn dominant_frequency(spectrum: &Spectrum) -> Result<DominantFrequency> {
    let bins = spectrum.amplitudes.len().min(spectrum.frequencies.len());
    if bins < 2 {
        return Err(AnalysisError::EmptySpectrum { bins });
    }

    let mut best_bin = 1;
    let mut best_amp = spectrum.amplitudes[1];
    for k in 2..bins {
        let amp = spectrum.amplitudes[k];
        // Strict comparison keeps the first maximum.
        if amp > best_amp {
            best_amp = amp;
            best_bin = k;
        }
    }

    Ok(DominantFrequency {
        bin: best_bin,
        frequency_hz: spectrum.frequencies[best_bin],
        amplitude: best_amp,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr1, Array1};

    fn spectrum(amps: &[f64]) -> Spectrum {
        Spectrum {
            frequencies: Array1::from_iter((0..amps.len()).map(|k| k as f64 * 10.0)),
            amplitudes: arr1(amps),
        }
    }

    #[test]
    fn picks_largest_non_dc_bin() {
        let peak = dominant_frequency(&spectrum(&[0.1, 0.2, 0.9, 0.3])).unwrap();
        assert_eq!(peak.bin, 2);
        assert_eq!(peak.frequency_hz, 20.0);
        assert_eq!(peak.amplitude, 0.9);
    }

    #[test]
    fn never_returns_dc_even_when_largest() {
        let peak = dominant_frequency(&spectrum(&[100.0, 0.5, 0.25])).unwrap();
        assert_eq!(peak.bin, 1);
        assert_eq!(peak.frequency_hz, 10.0);
    }

    #[test]
    fn ties_resolve_to_lowest_frequency() {
        let peak = dominant_frequency(&spectrum(&[0.0, 0.4, 0.7, 0.1, 0.7, 0.7])).unwrap();
        assert_eq!(peak.bin, 2);
    }

    #[test]
    fn two_bins_returns_the_only_candidate() {
        let peak = dominant_frequency(&spectrum(&[5.0, 0.0])).unwrap();
        assert_eq!(peak.bin, 1);
    }

    #[test]
    fn fewer_than_two_bins_fail() {
        assert!(matches!(
            dominant_frequency(&spectrum(&[1.0])),
            Err(AnalysisError::EmptySpectrum { bins: 1 })
        ));
        assert!(matches!(
            dominant_frequency(&spectrum(&[])),
            Err(AnalysisError::EmptySpectrum { bins: 0 })
        ));
    }
}

// src/data_analysis/peak_detection.rs
