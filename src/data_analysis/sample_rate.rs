// src/data_analysis/sample_rate.rs

use crate::error::{AnalysisError, Result};

/// Estimates the sampling frequency implied by a (possibly jittery) timestamp
/// sequence as the reciprocal of the mean positive interval.
///
/// Non-finite and non-positive intervals (duplicate or out-of-order timestamps)
/// are skipped. The mean is not robust to dropped samples: a single large gap
/// pulls the estimate down.
pub fn estimate_sample_rate(time_sec: &[f64]) -> Result<f64> {
    let mut total_delta = 0.0;
    let mut count = 0usize;
    for pair in time_sec.windows(2) {
        let delta = pair[1] - pair[0];
        if delta.is_finite() && delta > 0.0 {
            total_delta += delta;
            count += 1;
        }
    }

    if count == 0 {
        return Err(AnalysisError::RateEstimation {
            samples: time_sec.len(),
        });
    }

    let avg_delta = total_delta / count as f64;
    let sample_rate = 1.0 / avg_delta;
    log::debug!(
        "Sample rate from {count} of {} intervals: {sample_rate:.2} Hz",
        time_sec.len().saturating_sub(1)
    );
    Ok(sample_rate)
}


// src/data_analysis/sample_rate.rs
