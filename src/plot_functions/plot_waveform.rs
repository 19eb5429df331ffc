// src/plot_functions/plot_waveform.rs

use ndarray::Array1;
use ndarray_stats::QuantileExt; // .min()/.max() on Array1
use std::error::Error;
use std::path::Path;

use crate::constants::{COLOR_WAVEFORM, LINE_WIDTH_PLOT};
use crate::data_input::sample_data::SampleData;
use crate::plot_framework::{calculate_range, draw_single_chart, PlotConfig, PlotSeries};

/// Generates the voltage-vs-time plot of the loaded capture.
pub fn plot_waveform(
    samples: &SampleData,
    output_dir: &Path,
    root_name: &str,
) -> Result<(), Box<dyn Error>> {
    let output_file = output_dir.join(format!("{root_name}_Waveform.png"));

    let time = Array1::from(samples.time_sec().to_vec());
    let voltage = Array1::from(samples.voltage().to_vec());
    let (time_min, time_max) = match (time.min(), time.max()) {
        (Ok(lo), Ok(hi)) => (*lo, *hi),
        _ => return Err("waveform time axis has no ordered values".into()),
    };
    let (volt_min, volt_max) = match (voltage.min(), voltage.max()) {
        (Ok(lo), Ok(hi)) => (*lo, *hi),
        _ => return Err("waveform voltage axis has no ordered values".into()),
    };
    let (y_min, y_max) = calculate_range(volt_min, volt_max);
    // Identical timestamps would collapse the x axis.
    let x_range = if time_max > time_min {
        time_min..time_max
    } else {
        let (lo, hi) = calculate_range(time_min, time_max);
        lo..hi
    };

    let plot_config = PlotConfig {
        title: "Waveform".to_string(),
        x_range,
        y_range: y_min..y_max,
        series: vec![PlotSeries {
            data: samples.points(),
            label: "Voltage".to_string(),
            color: *COLOR_WAVEFORM,
            stroke_width: LINE_WIDTH_PLOT,
        }],
        x_label: "Time (s)".to_string(),
        y_label: "Voltage (V)".to_string(),
        peak: None,
    };

    draw_single_chart(&output_file, root_name, &plot_config)
}

// src/plot_functions/plot_waveform.rs
