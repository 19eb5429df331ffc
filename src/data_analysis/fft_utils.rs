// src/data_analysis/fft_utils.rs

use ndarray::Array1;
use realfft::num_complex::Complex64;
use realfft::RealFftPlanner;

use crate::error::{AnalysisError, Result};

/// Number of non-negative frequency bins produced by a real FFT of length `n`.
pub fn rfft_len(n: usize) -> usize {
    n / 2 + 1
}

/// Computes the Fast Fourier Transform (FFT) of a real-valued signal.
/// Returns the `n / 2 + 1` non-negative frequency terms. Handles empty input.
pub fn fft_forward(data: &Array1<f64>) -> Result<Array1<Complex64>> {
    if data.is_empty() {
        return Ok(Array1::zeros(0));
    }
    let n = data.len();
    let mut input = data.to_vec();
    let planner = RealFftPlanner::<f64>::new().plan_fft_forward(n);
    let mut output = planner.make_output_vec();
    planner
        .process(&mut input, &mut output)
        .map_err(|e| AnalysisError::Fft(e.to_string()))?;
    Ok(Array1::from(output))
}

/// Calculates the bin center frequencies for the real FFT output:
/// `k * sample_rate / n` for `k = 0 ..= n / 2`.
pub fn fft_rfftfreq(n: usize, sample_rate: f64) -> Array1<f64> {
    if n == 0 || sample_rate <= 0.0 {
        return Array1::zeros(0);
    }
    let bin_width = sample_rate / n as f64;
    Array1::from_iter((0..rfft_len(n)).map(|k| k as f64 * bin_width))
}

/// Symmetric Hann window, `0.5 - 0.5 cos(2πi / (n - 1))`.
/// A single-sample window is `[1.0]`.
pub fn hann_window(n: usize) -> Array1<f64> {
    match n {
        0 => Array1::zeros(0),
        1 => Array1::ones(1),
        _ => {
            let denom = (n - 1) as f64;
            Array1::from_iter(
                (0..n).map(|i| 0.5 - 0.5 * (2.0 * std::f64::consts::PI * i as f64 / denom).cos()),
            )
        }
    }
}


// src/data_analysis/fft_utils.rs
