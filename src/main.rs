//! PlantVillage disease prediction CLI
//!
//! `plantvillage_predict <IMAGE>` classifies one leaf photo and prints
//! `{"prediction": ..., "solutions": [...]}` on stdout. Progress and
//! diagnostics go to stderr; any failure exits with code 1.

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use tracing::{debug, info};

use plantvillage_predict::backend::{backend_name, default_device, DefaultBackend};
use plantvillage_predict::config::{Overrides, PredictConfig};
use plantvillage_predict::inference::{run, PredictRequest};
use plantvillage_predict::utils::logging::init_logging;
use plantvillage_predict::{verify_catalog, PredictError, Result};

/// PlantVillage plant disease prediction
///
/// Runs a ResNet9 classifier on one image and reports the disease with its
/// Vietnamese name and remedies as JSON.
#[derive(Parser, Debug)]
#[command(name = "plantvillage_predict")]
#[command(author = "Warre Snaet")]
#[command(version)]
#[command(about = "Predict plant disease from a leaf image", long_about = None)]
struct Cli {
    /// Path to the leaf image
    image: PathBuf,

    /// Path to the .mpk model weights
    #[arg(short, long, env = "PLANTVILLAGE_MODEL")]
    model: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, default_value = "false", conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, default_value = "false")]
    quiet: bool,

    /// Pretty-print the JSON result
    #[arg(long, default_value = "false")]
    pretty: bool,
}

fn main() -> ExitCode {
    colored::control::set_override(std::io::stderr().is_terminal());

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version print to stdout and succeed
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match predict(cli) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            debug!("Failure kind: {}", e.kind());
            ExitCode::from(e.exit_code())
        }
    }
}

fn predict(cli: Cli) -> Result<String> {
    let config = PredictConfig::load(cli.config.as_deref())?.merge(Overrides {
        model_path: cli.model,
        verbose: cli.verbose,
        quiet: cli.quiet,
        pretty: cli.pretty,
    });

    let mut log_config = config.log_config()?;
    if cli.verbose {
        log_config.include_target = true;
    }
    init_logging(&log_config).map_err(PredictError::Usage)?;

    verify_catalog()?;
    debug!("Class catalog is consistent");

    info!("Backend: {}", backend_name());
    let request = PredictRequest::new(cli.image, config.model_path);
    let device = default_device();

    let diagnosis = run::<DefaultBackend>(&request, &device)?;
    diagnosis.to_json(config.pretty)
}
