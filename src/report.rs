// src/report.rs

use crate::pipeline::AnalysisOutput;

/// Console summary of one analysis run, one line per entry.
pub fn format_report(input_name: &str, output: &AnalysisOutput) -> Vec<String> {
    vec![
        format!("File: {input_name}"),
        format!("Estimated sample rate: {:.2} Hz", output.sample_rate_hz),
        format!(
            "Dominant frequency: {:.2} Hz (amplitude ~ {:.4})",
            output.dominant.frequency_hz, output.dominant.amplitude
        ),
    ]
}

pub fn print_report(input_name: &str, output: &AnalysisOutput) {
    for line in format_report(input_name, output) {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_analysis::peak_detection::DominantFrequency;
    use crate::data_analysis::spectral_analysis::Spectrum;
    use ndarray::arr1;

    #[test]
    fn report_lines_use_fixed_precision() {
        let output = AnalysisOutput {
            sample_rate_hz: 99_999.996,
            spectrum: Spectrum {
                frequencies: arr1(&[0.0, 50.0]),
                amplitudes: arr1(&[0.0, 1.0]),
            },
            dominant: DominantFrequency {
                bin: 20,
                frequency_hz: 1000.0,
                amplitude: 0.98761,
            },
            display_max_hz: 5000.0,
        };
        let lines = format_report("capture.csv", &output);
        assert_eq!(
            lines,
            vec![
                "File: capture.csv".to_string(),
                "Estimated sample rate: 100000.00 Hz".to_string(),
                "Dominant frequency: 1000.00 Hz (amplitude ~ 0.9876)".to_string(),
            ]
        );
    }
}

// src/report.rs
