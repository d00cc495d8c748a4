//! End-to-end prediction for one image
//!
//! validate -> load model -> preprocess -> predict -> resolve. Every stage
//! reports progress on stderr through `tracing`; stdout is left to the caller.

use std::path::{Path, PathBuf};
use std::time::Instant;

use burn::tensor::backend::Backend;
use tracing::{debug, info};

use super::diagnosis::Diagnosis;
use super::predictor::{Classifier, Predictor};
use super::preprocess::preprocess;
use crate::model::{load_model, ResNet9Config};
use crate::utils::error::{PredictError, Result};

/// Inputs of one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictRequest {
    pub image_path: PathBuf,
    pub model_path: PathBuf,
}

impl PredictRequest {
    pub fn new(image_path: impl Into<PathBuf>, model_path: impl Into<PathBuf>) -> Self {
        Self {
            image_path: image_path.into(),
            model_path: model_path.into(),
        }
    }
}

/// Check that both input files exist, model first
pub fn validate_inputs(request: &PredictRequest) -> Result<()> {
    info!("Checking model file: {}", request.model_path.display());
    if !request.model_path.is_file() {
        return Err(PredictError::ModelNotFound(request.model_path.clone()));
    }

    info!("Checking image file: {}", request.image_path.display());
    if !request.image_path.is_file() {
        return Err(PredictError::ImageNotFound(request.image_path.clone()));
    }

    Ok(())
}

/// Classify one image with an already loaded predictor
pub fn diagnose_with<B: Backend, M: Classifier<B>>(
    predictor: &Predictor<B, M>,
    image_path: &Path,
    device: &B::Device,
) -> Result<Diagnosis> {
    info!("Processing image...");
    let input = preprocess::<B>(image_path, device)?;
    info!("Image processed successfully");

    info!("Running prediction...");
    let start = Instant::now();
    let prediction = predictor.predict(input)?;
    debug!("Forward pass took {:.1} ms", start.elapsed().as_secs_f64() * 1000.0);
    info!("Prediction completed: {}", prediction.class_id);

    Diagnosis::resolve(prediction.class_id)
}

/// Run the whole pipeline for one request
pub fn run<B: Backend>(request: &PredictRequest, device: &B::Device) -> Result<Diagnosis> {
    validate_inputs(request)?;

    info!("Loading model...");
    let model = load_model::<B>(&request.model_path, &ResNet9Config::new(), device)?;
    info!("Model loaded successfully");

    let predictor = Predictor::<B, _>::new(model);
    diagnose_with(&predictor, &request.image_path, device)
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn_ndarray::NdArray;
    use tempfile::TempDir;

    type TestBackend = NdArray;

    #[test]
    fn test_model_is_checked_first() {
        let request = PredictRequest::new("missing.jpg", "missing.mpk");
        let err = validate_inputs(&request).unwrap_err();
        assert!(matches!(err, PredictError::ModelNotFound(_)));
    }

    #[test]
    fn test_missing_image_fails_before_loading() {
        let temp_dir = TempDir::new().unwrap();
        let model_path = temp_dir.path().join("model.mpk");
        // Not a valid record: loading it would fail with ModelLoad
        std::fs::write(&model_path, b"garbage").unwrap();

        let request = PredictRequest::new(temp_dir.path().join("leaf.jpg"), &model_path);
        let device = Default::default();
        let err = run::<TestBackend>(&request, &device).unwrap_err();
        assert!(matches!(err, PredictError::ImageNotFound(_)));
    }

    #[test]
    fn test_directory_is_not_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let request = PredictRequest::new(temp_dir.path(), temp_dir.path());
        assert!(validate_inputs(&request).is_err());
    }
}
