// src/data_analysis/spectral_analysis.rs

use ndarray::Array1;

use crate::data_analysis::fft_utils;
use crate::error::{AnalysisError, Result};

/// Single-sided amplitude spectrum: parallel bin frequencies (Hz) and amplitudes.
///
/// `frequencies` starts at 0 Hz and is strictly increasing; both arrays hold
/// `n / 2 + 1` entries for an `n`-sample input.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    pub frequencies: Array1<f64>,
    pub amplitudes: Array1<f64>,
}

impl Spectrum {
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Highest bin frequency, or 0 for an empty spectrum.
    pub fn max_frequency(&self) -> f64 {
        match self.frequencies.len() {
            0 => 0.0,
            len => self.frequencies[len - 1],
        }
    }

    /// Spacing between adjacent bins (`sample_rate / n`).
    pub fn bin_width(&self) -> Option<f64> {
        if self.frequencies.len() < 2 {
            None
        } else {
            Some(self.frequencies[1] - self.frequencies[0])
        }
    }

    /// (frequency, amplitude) pairs, as consumed by the spectrum plot.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.frequencies
            .iter()
            .copied()
            .zip(self.amplitudes.iter().copied())
            .collect()
    }
}

/// Computes the single-sided amplitude spectrum of a real signal.
///
/// The mean is removed, a Hann window applied, and magnitudes are scaled by
/// `1 / (n * coherent_gain)` so that a sinusoid of amplitude A reads close to A
/// at its bin. All bins except the first and the last are doubled to fold in the
/// discarded negative frequencies; with two or fewer bins nothing is doubled.
pub fn amplitude_spectrum(signal: &[f64], sample_rate: f64) -> Result<Spectrum> {
    if signal.is_empty() {
        return Err(AnalysisError::InvalidParameter(
            "spectral analyzer: empty signal".to_string(),
        ));
    }
    if !sample_rate.is_finite() || sample_rate <= 0.0 {
        return Err(AnalysisError::InvalidParameter(format!(
            "spectral analyzer: sample rate must be positive and finite, got {sample_rate}"
        )));
    }

    let n = signal.len();
    let samples = Array1::from(signal.to_vec());
    let mean = samples.sum() / n as f64;
    let window = fft_utils::hann_window(n);
    let windowed = (samples - mean) * &window;

    let spectrum = fft_utils::fft_forward(&windowed)?;
    let frequencies = fft_utils::fft_rfftfreq(n, sample_rate);

    // Amplitude correction (coherent gain).
    let coherent_gain = window.sum() / n as f64;
    let scale = 1.0 / (n as f64 * coherent_gain);
    let mut amplitudes = spectrum.mapv(|c| c.norm() * scale);

    let num_bins = amplitudes.len();
    if num_bins > 2 {
        amplitudes
            .slice_mut(ndarray::s![1..num_bins - 1])
            .mapv_inplace(|a| a * 2.0);
    }

    log::debug!(
        "Spectrum: {n} samples, {num_bins} bins, {:.3} Hz resolution",
        sample_rate / n as f64
    );

    Ok(Spectrum {
        frequencies,
        amplitudes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn sine(n: usize, sample_rate: f64, freq: f64, amplitude: f64, offset: f64) -> Vec<f64> {
        (0..n)
            .map(|i| offset + amplitude * (2.0 * PI * freq * i as f64 / sample_rate).sin())
            .collect()
    }

    #[test]
    fn bin_count_and_frequency_axis() {
        for n in [10usize, 11, 256, 1001] {
            let spectrum = amplitude_spectrum(&sine(n, 1000.0, 50.0, 1.0, 0.0), 1000.0).unwrap();
            assert_eq!(spectrum.len(), n / 2 + 1);
            assert_eq!(spectrum.amplitudes.len(), n / 2 + 1);
            assert_eq!(spectrum.frequencies[0], 0.0);
            assert!(spectrum
                .frequencies
                .iter()
                .zip(spectrum.frequencies.iter().skip(1))
                .all(|(lo, hi)| hi > lo));
            assert!(spectrum.amplitudes.iter().all(|&a| a >= 0.0));
        }
    }

    #[test]
    fn recovers_on_bin_sinusoid_amplitude() {
        // 1 kHz at 64 kHz with 1024 samples lands exactly on bin 16.
        let amplitude = 2.5;
        let signal = sine(1024, 64_000.0, 1000.0, amplitude, 0.7);
        let spectrum = amplitude_spectrum(&signal, 64_000.0).unwrap();
        assert!((spectrum.frequencies[16] - 1000.0).abs() < 1e-9);
        let recovered = spectrum.amplitudes[16];
        assert!(
            (recovered - amplitude).abs() / amplitude < 0.05,
            "recovered {recovered}, expected {amplitude}"
        );
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let signal = sine(777, 10_000.0, 333.0, 1.0, 0.1);
        let first = amplitude_spectrum(&signal, 10_000.0).unwrap();
        let second = amplitude_spectrum(&signal, 10_000.0).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn constant_signal_has_no_content() {
        let spectrum = amplitude_spectrum(&[3.3; 32], 100.0).unwrap();
        assert!(spectrum.amplitudes.iter().all(|&a| a < 1e-12));
    }

    #[test]
    fn first_and_last_bins_are_not_doubled() {
        // Alternating signal puts all energy at Nyquist (last bin, even n).
        let signal: Vec<f64> = (0..16).map(|i| if i % 2 == 0 { 1.0 } else { -1.0 }).collect();
        let spectrum = amplitude_spectrum(&signal, 16.0).unwrap();
        // X[n/2] = sum(w) exactly, so the undoubled amplitude is 1.
        assert!((spectrum.amplitudes[8] - 1.0).abs() < 1e-9);
        assert!(spectrum.amplitudes[0] < 1e-9);
    }

    #[test]
    fn rejects_bad_parameters() {
        assert!(matches!(
            amplitude_spectrum(&[], 100.0),
            Err(AnalysisError::InvalidParameter(_))
        ));
        assert!(amplitude_spectrum(&[1.0, 2.0], 0.0).is_err());
        assert!(amplitude_spectrum(&[1.0, 2.0], f64::NAN).is_err());
    }

    #[test]
    fn helpers_report_axis_properties() {
        let spectrum = amplitude_spectrum(&sine(200, 1000.0, 100.0, 1.0, 0.0), 1000.0).unwrap();
        assert!((spectrum.bin_width().unwrap() - 5.0).abs() < 1e-12);
        assert!((spectrum.max_frequency() - 500.0).abs() < 1e-9);
        assert_eq!(spectrum.points().len(), 101);
    }
}

// src/data_analysis/spectral_analysis.rs
