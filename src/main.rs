// src/main.rs

use std::error::Error;
use std::path::Path;

use scope_analyzer::cli::{parse_args, usage, CliArgs, CliCommand};
use scope_analyzer::crate_version;
use scope_analyzer::pipeline::{analyze_file, AnalysisConfig};
use scope_analyzer::plot_functions::plot_spectrum::plot_spectrum;
use scope_analyzer::plot_functions::plot_waveform::plot_waveform;
use scope_analyzer::report::print_report;

fn run(args: &CliArgs) -> Result<(), Box<dyn Error>> {
    let config = AnalysisConfig {
        max_display_hz: args.max_display_hz,
    };
    let (samples, output) = analyze_file(&args.input_file, &config)?;

    print_report(&args.input_file.display().to_string(), &output);

    if args.plots {
        let root_name = args
            .input_file
            .file_stem()
            .unwrap_or_default()
            .to_string_lossy()
            .into_owned();
        println!("\n--- Generating Plots ---");
        if !args.output_dir.as_os_str().is_empty() && !args.output_dir.exists() {
            std::fs::create_dir_all(&args.output_dir)?;
        }
        plot_waveform(&samples, &args.output_dir, &root_name)?;
        plot_spectrum(&output, &args.output_dir, &root_name)?;
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut raw_args = std::env::args();
    let program = raw_args.next().unwrap_or_else(|| "scope_analyzer".to_string());
    let program_name = Path::new(&program)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| program.clone());

    let args = match parse_args(raw_args) {
        Ok(CliCommand::Run(args)) => args,
        Ok(CliCommand::Help) => {
            println!("{}", usage(&program_name));
            return;
        }
        Ok(CliCommand::Version) => {
            println!("{program_name} {}", crate_version());
            return;
        }
        Err(message) => {
            eprintln!("Error: {message}\n\n{}", usage(&program_name));
            std::process::exit(2);
        }
    };

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
