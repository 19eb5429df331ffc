// src/constants.rs

use plotters::style::colors::full_palette::{BLUE_700, RED_700};
use plotters::style::RGBColor;

// Minimum number of valid (finite) rows required for spectral estimation.
pub const MIN_VALID_ROWS: usize = 10;

// Upper bound of the spectrum plot's visible frequency range. Clamped to the
// spectrum's highest bin when larger.
pub const DEFAULT_MAX_DISPLAY_HZ: f64 = 5000.0;

// Input file used when none is given on the command line.
pub const DEFAULT_INPUT_FILE: &str = "sample_data.csv";

// Header written by the sample generator.
pub const CSV_HEADER_TIME: &str = "time";
pub const CSV_HEADER_VOLTAGE: &str = "voltage";

// Plot dimensions.
pub const PLOT_WIDTH: u32 = 1600;
pub const PLOT_HEIGHT: u32 = 900;

// Font sizes.
pub const FONT_SIZE_MAIN_TITLE: i32 = 24;
pub const FONT_SIZE_CHART_TITLE: i32 = 20;
pub const FONT_SIZE_AXIS_LABEL: i32 = 16;
pub const FONT_SIZE_PEAK_LABEL: i32 = 16;

// --- Plot Color Assignments ---
pub const COLOR_WAVEFORM: &RGBColor = &BLUE_700;
pub const COLOR_SPECTRUM: &RGBColor = &BLUE_700;
pub const COLOR_PEAK_MARKER: &RGBColor = &RED_700;

// Stroke widths for lines
pub const LINE_WIDTH_PLOT: u32 = 1;
pub const PEAK_MARKER_RADIUS_PX: i32 = 5;

// --- Sample Generator Defaults ---
pub const GENERATOR_SAMPLE_RATE_HZ: f64 = 100_000.0;
pub const GENERATOR_DURATION_S: f64 = 0.02;
pub const GENERATOR_FREQUENCY_HZ: f64 = 1000.0;
pub const GENERATOR_AMPLITUDE: f64 = 1.0;
pub const GENERATOR_NOISE_LEVEL: f64 = 0.05;

// src/constants.rs
