// src/plot_framework.rs

use plotters::backend::BitMapBackend;
use plotters::chart::ChartBuilder;
use plotters::drawing::IntoDrawingArea;
use plotters::element::{Circle, Text};
use plotters::series::LineSeries;
use plotters::style::colors::{BLACK, WHITE};
use plotters::style::{Color, IntoFont, RGBColor};

use std::error::Error;
use std::ops::Range;
use std::path::Path;

use crate::constants::{
    COLOR_PEAK_MARKER, FONT_SIZE_AXIS_LABEL, FONT_SIZE_CHART_TITLE, FONT_SIZE_MAIN_TITLE,
    FONT_SIZE_PEAK_LABEL, PEAK_MARKER_RADIUS_PX, PLOT_HEIGHT, PLOT_WIDTH,
};

/// Calculate plot range with padding.
/// Adds 15% padding, or a fixed padding for very small ranges.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-6 { 0.5 } else { range * 0.15 };
    (min - padding, max + padding)
}

#[derive(Clone)]
pub struct PlotSeries {
    pub data: Vec<(f64, f64)>,
    pub label: String,
    pub color: RGBColor,
    pub stroke_width: u32,
}

/// A labelled point drawn on top of the series, e.g. the dominant spectral peak.
#[derive(Clone)]
pub struct PeakMarker {
    pub x: f64,
    pub y: f64,
    pub label: String,
}

#[derive(Clone)]
pub struct PlotConfig {
    pub title: String,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub series: Vec<PlotSeries>,
    pub x_label: String,
    pub y_label: String,
    pub peak: Option<PeakMarker>,
}

/// Renders a single line chart into a PNG file.
///
/// `root_name` is drawn as the image heading (usually the input file stem).
pub fn draw_single_chart(
    output_filename: &Path,
    root_name: &str,
    plot_config: &PlotConfig,
) -> Result<(), Box<dyn Error>> {
    if plot_config.series.iter().all(|s| s.data.is_empty()) {
        return Err(format!("no data to plot for '{}'", plot_config.title).into());
    }
    if !(plot_config.x_range.end > plot_config.x_range.start
        && plot_config.y_range.end > plot_config.y_range.start)
    {
        return Err(format!("invalid axis ranges for '{}'", plot_config.title).into());
    }

    let root_area =
        BitMapBackend::new(output_filename, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root_area.fill(&WHITE)?;
    root_area.draw(&Text::new(
        root_name.to_string(),
        (10, 10),
        ("sans-serif", FONT_SIZE_MAIN_TITLE)
            .into_font()
            .color(&BLACK),
    ))?;
    let area = root_area.margin(50, 5, 5, 5);

    let mut chart = ChartBuilder::on(&area)
        .caption(&plot_config.title, ("sans-serif", FONT_SIZE_CHART_TITLE))
        .margin(5)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(plot_config.x_range.clone(), plot_config.y_range.clone())?;

    chart
        .configure_mesh()
        .x_desc(&plot_config.x_label)
        .y_desc(&plot_config.y_label)
        .x_labels(20)
        .y_labels(10)
        .label_style(("sans-serif", FONT_SIZE_AXIS_LABEL))
        .draw()?;

    for s in plot_config.series.iter().filter(|s| !s.data.is_empty()) {
        chart.draw_series(LineSeries::new(
            s.data.iter().cloned(),
            s.color.stroke_width(s.stroke_width),
        ))?;
    }

    if let Some(peak) = &plot_config.peak {
        chart.draw_series(std::iter::once(Circle::new(
            (peak.x, peak.y),
            PEAK_MARKER_RADIUS_PX,
            COLOR_PEAK_MARKER.filled(),
        )))?;
        chart.draw_series(std::iter::once(Text::new(
            peak.label.clone(),
            (peak.x, peak.y),
            ("sans-serif", FONT_SIZE_PEAK_LABEL)
                .into_font()
                .color(COLOR_PEAK_MARKER),
        )))?;
    }

    root_area.present()?;
    println!("  Plot saved as '{}'.", output_filename.display());
    Ok(())
}


// src/plot_framework.rs
