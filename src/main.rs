use bmi::core::bmi::{InputError, evaluate};
use bmi::core::config::{self, CliOverrides, ResolvedConfig};
use bmi::core::BmiResult;
use clap::Parser;
use log::{info, warn};
use serde::Serialize;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "bmi", about = "Body Mass Index calculator")]
struct Args {
    /// Height in centimeters (one-shot mode, skips the TUI)
    #[arg(long, requires = "weight", allow_hyphen_values = true)]
    height: Option<String>,

    /// Weight in kilograms (one-shot mode, skips the TUI)
    #[arg(long, requires = "height", allow_hyphen_values = true)]
    weight: Option<String>,

    /// Print the one-shot result as JSON
    #[arg(long, requires = "height")]
    json: bool,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long)]
    log_level: Option<String>,

    /// Read config from this file instead of ~/.bmi/config.toml
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    #[serde(flatten)]
    result: &'a BmiResult,
    color: bmi::core::ColorToken,
}

fn main() -> std::io::Result<ExitCode> {
    let args = Args::parse();

    // Config is loaded before the logger exists, so problems are reported after init
    let (file_config, config_error) = match config::load_config(args.config.as_deref()) {
        Ok(c) => (c, None),
        Err(e) => (config::BmiConfig::default(), Some(e)),
    };
    let cli = CliOverrides {
        log_level: args.log_level.clone(),
    };
    let config = config::resolve(&file_config, &cli);

    // Initialize file logger, the terminal belongs to the UI
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&config.log_file) {
        let _ = WriteLogger::init(config.log_level, log_config, log_file);
    }
    if let Some(e) = config_error {
        warn!("Ignoring config: {}", e);
    }

    match (args.height, args.weight) {
        (Some(height), Some(weight)) => Ok(one_shot(&height, &weight, args.json, &config)),
        _ => {
            info!("BMI calculator starting up");
            bmi::tui::run(&config)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn one_shot(height: &str, weight: &str, json: bool, config: &ResolvedConfig) -> ExitCode {
    info!("One-shot calculation: height={:?} weight={:?}", height, weight);
    match evaluate(height, weight) {
        Ok(result) => {
            if json {
                print_json(&result)
            } else {
                println!("BMI: {}", result.format_bmi(config.decimal_places));
                println!("Category: {}", result.category);
                if config.show_message {
                    println!("{}", result.message);
                }
                ExitCode::SUCCESS
            }
        }
        Err(e) => report(&e),
    }
}

fn print_json(result: &BmiResult) -> ExitCode {
    let output = JsonOutput {
        result,
        color: result.color(),
    };
    match serde_json::to_string_pretty(&output) {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize result: {e}");
            ExitCode::FAILURE
        }
    }
}

fn report(error: &InputError) -> ExitCode {
    info!("One-shot calculation rejected: {}", error);
    eprintln!("error: {error}");
    ExitCode::FAILURE
}
