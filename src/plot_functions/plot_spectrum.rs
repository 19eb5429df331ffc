// src/plot_functions/plot_spectrum.rs

use std::error::Error;
use std::path::Path;

use crate::constants::{COLOR_SPECTRUM, LINE_WIDTH_PLOT};
use crate::pipeline::AnalysisOutput;
use crate::plot_framework::{draw_single_chart, PeakMarker, PlotConfig, PlotSeries};

/// Points of the spectrum inside `[0, max_hz]`.
pub fn visible_points(points: &[(f64, f64)], max_hz: f64) -> Vec<(f64, f64)> {
    points
        .iter()
        .copied()
        .take_while(|&(freq, _)| freq <= max_hz)
        .collect()
}

/// Generates the amplitude spectrum plot, clipped to the configured display
/// limit, with the dominant peak marked.
pub fn plot_spectrum(
    output: &AnalysisOutput,
    output_dir: &Path,
    root_name: &str,
) -> Result<(), Box<dyn Error>> {
    let output_file = output_dir.join(format!("{root_name}_Spectrum.png"));

    let max_hz = output.display_max_hz;
    let series_data = visible_points(&output.spectrum.points(), max_hz);
    let amp_max = series_data
        .iter()
        .map(|&(_, amp)| amp)
        .fold(0.0f64, |max_val, amp| max_val.max(amp));
    let y_max = if amp_max > 0.0 { amp_max * 1.15 } else { 1.0 };

    let dominant = output.dominant;
    let peak = (dominant.frequency_hz <= max_hz).then(|| PeakMarker {
        x: dominant.frequency_hz,
        y: dominant.amplitude,
        label: format!(
            " Peak: {:.4} at {:.2} Hz",
            dominant.amplitude, dominant.frequency_hz
        ),
    });

    let plot_config = PlotConfig {
        title: "FFT Spectrum".to_string(),
        x_range: 0.0..max_hz,
        y_range: 0.0..y_max,
        series: vec![PlotSeries {
            data: series_data,
            label: "Amplitude".to_string(),
            color: *COLOR_SPECTRUM,
            stroke_width: LINE_WIDTH_PLOT,
        }],
        x_label: "Frequency (Hz)".to_string(),
        y_label: "Amplitude".to_string(),
        peak,
    };

    draw_single_chart(&output_file, root_name, &plot_config)
}


// src/plot_functions/plot_spectrum.rs
