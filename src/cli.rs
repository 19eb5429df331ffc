// src/cli.rs

use std::path::PathBuf;

use crate::constants::{DEFAULT_INPUT_FILE, DEFAULT_MAX_DISPLAY_HZ};

#[derive(Debug, Clone, PartialEq)]
pub struct CliArgs {
    pub input_file: PathBuf,
    pub max_display_hz: f64,
    pub output_dir: PathBuf,
    pub plots: bool,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            input_file: PathBuf::from(DEFAULT_INPUT_FILE),
            max_display_hz: DEFAULT_MAX_DISPLAY_HZ,
            output_dir: PathBuf::from("."),
            plots: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    Run(CliArgs),
    Help,
    Version,
}

pub fn usage(program: &str) -> String {
    format!(
        "Simple Oscilloscope CSV Analyzer (Waveform + FFT)\n\n\
         Usage: {program} [csv_file] [--max-hz <HZ>] [--output-dir <DIR>] [--no-plots]\n\n\
         Arguments:\n  \
           csv_file             Path to CSV file (default: {DEFAULT_INPUT_FILE})\n\n\
         Options:\n  \
           --max-hz <HZ>        Max frequency to show on FFT plot (default: {DEFAULT_MAX_DISPLAY_HZ} Hz)\n  \
           --output-dir <DIR>   Directory for the PNG plots (default: current directory)\n  \
           --no-plots           Print the report only\n  \
           -h, --help           Show this help\n  \
           -V, --version        Show version"
    )
}

/// Parses command-line arguments (without the program name).
pub fn parse_args<I>(args: I) -> Result<CliCommand, String>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = CliArgs::default();
    let mut input_file: Option<PathBuf> = None;
    let mut iter = args.into_iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(CliCommand::Help),
            "-V" | "--version" => return Ok(CliCommand::Version),
            "--no-plots" => parsed.plots = false,
            "--max-hz" => {
                let value = iter
                    .next()
                    .ok_or_else(|| "--max-hz requires a value".to_string())?;
                parsed.max_display_hz = parse_max_hz(&value)?;
            }
            "--output-dir" => {
                let value = iter
                    .next()
                    .ok_or_else(|| "--output-dir requires a value".to_string())?;
                parsed.output_dir = PathBuf::from(value);
            }
            _ if arg.starts_with("--max-hz=") => {
                parsed.max_display_hz = parse_max_hz(&arg["--max-hz=".len()..])?;
            }
            _ if arg.starts_with("--output-dir=") => {
                parsed.output_dir = PathBuf::from(&arg["--output-dir=".len()..]);
            }
            _ if arg.starts_with('-') && arg.len() > 1 => {
                return Err(format!("Unknown option '{arg}'"));
            }
            _ => {
                if input_file.is_some() {
                    return Err(format!("Unexpected extra argument '{arg}'"));
                }
                input_file = Some(PathBuf::from(arg));
            }
        }
    }

    if let Some(path) = input_file {
        parsed.input_file = path;
    }
    Ok(CliCommand::Run(parsed))
}

fn parse_max_hz(value: &str) -> Result<f64, String> {
    match value.trim().parse::<f64>() {
        Ok(hz) if hz.is_finite() && hz > 0.0 => Ok(hz),
        _ => Err(format!(
            "--max-hz expects a positive number of Hz, got '{value}'"
        )),
    }
}


// src/cli.rs
