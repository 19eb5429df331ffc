// src/error.rs

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the analysis pipeline. Every variant is terminal for the
/// current run; no partial results are returned.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("table loader: failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("table loader: CSV decoding failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("table loader: malformed input: {reason}")]
    MalformedInput { reason: String },

    #[error(
        "table loader: not enough valid data rows ({valid_rows} of {total_rows} usable, need at least {required})"
    )]
    InsufficientData {
        valid_rows: usize,
        total_rows: usize,
        required: usize,
    },

    #[error(
        "sample rate estimator: no positive finite interval between {samples} timestamps"
    )]
    RateEstimation { samples: usize },

    #[error("dominant frequency finder: spectrum has {bins} bin(s), need at least 2")]
    EmptySpectrum { bins: usize },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("spectral analyzer: FFT processing failed: {0}")]
    Fft(String),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;


// src/error.rs
