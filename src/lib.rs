//! # PlantVillage Predict
//!
//! Single-image plant disease diagnosis with a ResNet9 built on the Burn framework.
//! The predicted class is reported with its Vietnamese display name and remedy
//! recommendations as one JSON object on stdout.
//!
//! ## Modules
//!
//! - `catalog`: class registry and the Vietnamese name and remedy tables
//! - `model`: ResNet9 architecture, weight loading and PyTorch weight import
//! - `inference`: preprocessing, prediction and the end-to-end pipeline
//! - `config`: TOML configuration and command line precedence
//! - `utils`: logging and error handling
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use plantvillage_predict::backend::{default_device, DefaultBackend};
//! use plantvillage_predict::inference::{run, PredictRequest};
//!
//! let request = PredictRequest::new("leaf.jpg", "plant-disease-model-complete.mpk");
//! let diagnosis = run::<DefaultBackend>(&request, &default_device())?;
//! println!("{}", diagnosis.to_json(false)?);
//! ```

pub mod backend;
pub mod catalog;
pub mod config;
pub mod inference;
pub mod model;
pub mod utils;

// Re-export commonly used items for convenience
pub use catalog::{class_index, class_name, display_name, remedies_for, verify_catalog, CLASS_NAMES, NUM_CLASSES};
pub use config::{PredictConfig, DEFAULT_MODEL_PATH};
pub use inference::{Diagnosis, PredictRequest, Prediction, Predictor, IMAGE_SIZE};
pub use model::{ResNet9, ResNet9Config};
pub use utils::error::{ErrorKind, PredictError, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
