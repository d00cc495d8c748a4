//! Weight Import Tool
//!
//! Converts a JSON dump of a trained PyTorch ResNet9 `state_dict()` into the
//! `.mpk` weight record loaded by `plantvillage_predict`.
//!
//! Produce the dump in Python with:
//!   `{k: {"shape": list(v.shape), "data": v.flatten().tolist()} for k, v in model.state_dict().items()}`
//!
//! Usage:
//!   cargo run --release --bin import_weights -- --input state_dict.json --output plant-disease-model-complete.mpk

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing::info;

use plantvillage_predict::backend::{default_device, DefaultBackend};
use plantvillage_predict::config::DEFAULT_MODEL_PATH;
use plantvillage_predict::model::{import_state_dict, read_state_dict, save_model, ResNet9Config};
use plantvillage_predict::utils::logging::{init_logging, LogConfig};

/// Import PyTorch ResNet9 weights into a Burn weight record
#[derive(Parser, Debug)]
#[command(name = "import_weights")]
#[command(about = "Convert a PyTorch state dict dump into a .mpk weight record")]
struct Args {
    /// Path to the state dict JSON dump
    #[arg(short, long)]
    input: PathBuf,

    /// Output weight record
    #[arg(short, long, default_value = DEFAULT_MODEL_PATH)]
    output: PathBuf,

    /// Number of classes in the model
    #[arg(long, default_value = "38")]
    num_classes: usize,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _ = init_logging(&LogConfig::default());
    let device = default_device();

    eprintln!("{}", "=== Burn Weight Import Tool ===".green().bold());
    info!("Reading state dict from {}", args.input.display());

    let dict = read_state_dict(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    info!("Found {} tensors", dict.len());

    let config = ResNet9Config::new().with_num_classes(args.num_classes);
    let model = import_state_dict::<DefaultBackend>(&dict, &config, &device)
        .context("State dict does not match the ResNet9 architecture")?;
    info!("Bound all parameters ({} classes)", model.num_classes());

    let path = save_model(model, &args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    info!("Saved weight record to {}", path.display());
    eprintln!("{}", "Import complete!".green().bold());

    Ok(())
}
