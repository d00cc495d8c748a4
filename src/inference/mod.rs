//! Inference module for single image diagnosis
//!
//! This module provides:
//! - Image decoding and preprocessing to the network input format
//! - The forward pass and top-class selection
//! - Localized diagnosis lookup and JSON output

pub mod diagnosis;
pub mod pipeline;
pub mod predictor;
pub mod preprocess;

// Re-export main types for convenience
pub use diagnosis::Diagnosis;
pub use pipeline::{diagnose_with, run, validate_inputs, PredictRequest};
pub use predictor::{argmax, Classifier, Prediction, Predictor};
pub use preprocess::{image_to_tensor, load_image, preprocess, IMAGE_SIZE};
