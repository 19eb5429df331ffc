// src/plot_functions/mod.rs

pub mod plot_spectrum;
pub mod plot_waveform;

// src/plot_functions/mod.rs
