// src/data_input/sample_data.rs

use crate::constants::MIN_VALID_ROWS;
use crate::error::{AnalysisError, Result};

/// Aligned time/voltage samples of one capture.
///
/// Both sequences hold only finite values, have the same length, and contain at
/// least `MIN_VALID_ROWS` entries. Instances are never mutated after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleData {
    time_sec: Vec<f64>, // Timestamps (seconds). Not assumed to be monotonic.
    voltage: Vec<f64>,  // Measured voltage (volts).
}

impl SampleData {
    /// Builds a sample sequence from two raw columns.
    ///
    /// Rows where either value is non-finite are dropped from both columns.
    /// Fails when the columns differ in length or when fewer than
    /// `MIN_VALID_ROWS` rows survive.
    pub fn from_columns(time_sec: &[f64], voltage: &[f64]) -> Result<Self> {
        if time_sec.len() != voltage.len() {
            return Err(AnalysisError::MalformedInput {
                reason: format!(
                    "time and voltage columns differ in length ({} vs {})",
                    time_sec.len(),
                    voltage.len()
                ),
            });
        }
        let rows: Vec<(Option<f64>, Option<f64>)> = time_sec
            .iter()
            .zip(voltage)
            .map(|(&t, &v)| (Some(t), Some(v)))
            .collect();
        Self::from_rows(&rows)
    }

    /// Row-wise masking shared by every loader: a row is kept only when both
    /// values are present and finite.
    pub(crate) fn from_rows(rows: &[(Option<f64>, Option<f64>)]) -> Result<Self> {
        let total_rows = rows.len();
        let (time_sec, voltage): (Vec<f64>, Vec<f64>) = rows
            .iter()
            .filter_map(|&(t, v)| match (t, v) {
                (Some(t), Some(v)) if t.is_finite() && v.is_finite() => Some((t, v)),
                _ => None,
            })
            .unzip();

        let dropped = total_rows - time_sec.len();
        if dropped > 0 {
            log::warn!("Dropped {dropped} of {total_rows} rows with missing or non-finite values");
        }

        if time_sec.len() < MIN_VALID_ROWS {
            return Err(AnalysisError::InsufficientData {
                valid_rows: time_sec.len(),
                total_rows,
                required: MIN_VALID_ROWS,
            });
        }

        Ok(Self { time_sec, voltage })
    }

    pub fn time_sec(&self) -> &[f64] {
        &self.time_sec
    }

    pub fn voltage(&self) -> &[f64] {
        &self.voltage
    }

    pub fn len(&self) -> usize {
        self.time_sec.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time_sec.is_empty()
    }

    /// (time, voltage) pairs in row order, as consumed by the waveform plot.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.time_sec
            .iter()
            .copied()
            .zip(self.voltage.iter().copied())
            .collect()
    }
}


// src/data_input/sample_data.rs
