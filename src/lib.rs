// src/lib.rs - Library interface for the analysis pipeline and its collaborators

pub mod cli;
pub mod constants;
pub mod data_analysis;
pub mod data_input;
pub mod error;
pub mod pipeline;
pub mod plot_framework;
pub mod plot_functions;
pub mod report;
pub mod sample_generator;

pub use error::AnalysisError;
pub use pipeline::{analyze, analyze_file, AnalysisConfig, AnalysisOutput};

pub fn crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
