//! Weight loading and saving
//!
//! Weights live in Burn's named MessagePack format at full precision. The
//! recorder binds tensors to modules by field path but does not compare
//! shapes, so every loaded model is checked against the architecture before
//! it is handed out.

use std::path::{Path, PathBuf};

use burn::{
    module::Module,
    record::{FullPrecisionSettings, NamedMpkFileRecorder},
    tensor::backend::Backend,
};
use tracing::debug;

use super::resnet::{ConvBlock, ResNet9, ResNet9Config};
use crate::utils::catch_panic;
use crate::utils::error::{PredictError, Result};

/// File extension of the weight records
pub const WEIGHTS_EXTENSION: &str = "mpk";

/// Recorder used for every weight file
pub type WeightsRecorder = NamedMpkFileRecorder<FullPrecisionSettings>;

fn load_error(path: &Path, reason: impl Into<String>) -> PredictError {
    PredictError::ModelLoad {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
}

/// Load a ResNet9 from a weight record
///
/// Fails with [`PredictError::ModelNotFound`] when the path does not exist
/// and with [`PredictError::ModelLoad`] when the file is not a record for
/// this architecture.
pub fn load_model<B: Backend>(
    path: &Path,
    config: &ResNet9Config,
    device: &B::Device,
) -> Result<ResNet9<B>> {
    if !path.is_file() {
        return Err(PredictError::ModelNotFound(path.to_path_buf()));
    }

    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    if extension != WEIGHTS_EXTENSION {
        return Err(load_error(
            path,
            format!(
                "unsupported weight format '.{}', expected a .{} record \
                 (convert PyTorch checkpoints with `import_weights`)",
                extension, WEIGHTS_EXTENSION
            ),
        ));
    }

    debug!("Binding weights from {} to ResNet9", path.display());
    let model = catch_panic(|| {
        config
            .init::<B>(device)
            .load_file(path.to_path_buf(), &WeightsRecorder::new(), device)
    })
    .map_err(|reason| load_error(path, reason))?
    .map_err(|e| load_error(path, format!("{:?}", e)))?;

    check_architecture(&model, config).map_err(|reason| load_error(path, reason))?;

    Ok(model)
}

/// Save a model as a weight record, returning the written path
pub fn save_model<B: Backend>(model: ResNet9<B>, path: &Path) -> Result<PathBuf> {
    let path = path.with_extension(WEIGHTS_EXTENSION);
    model
        .save_file(path.clone(), &WeightsRecorder::new())
        .map_err(|e| PredictError::Io(std::io::Error::other(format!("{:?}", e))))?;
    Ok(path)
}

fn check_block<B: Backend>(
    name: &str,
    block: &ConvBlock<B>,
    in_channels: usize,
    out_channels: usize,
) -> std::result::Result<(), String> {
    let weight = block.conv.weight.dims();
    if weight != [out_channels, in_channels, 3, 3] {
        return Err(format!(
            "{name}.conv weight has shape {:?}, expected {:?}",
            weight,
            [out_channels, in_channels, 3, 3]
        ));
    }

    let stats = [
        ("gamma", block.bn.gamma.dims()),
        ("beta", block.bn.beta.dims()),
        ("running_mean", block.bn.running_mean.value().dims()),
        ("running_var", block.bn.running_var.value().dims()),
    ];
    for (field, dims) in stats {
        if dims != [out_channels] {
            return Err(format!(
                "{name}.bn {field} has shape {:?}, expected [{out_channels}]",
                dims
            ));
        }
    }

    Ok(())
}

/// Compare every parameter shape of `model` with what `config` describes
pub fn check_architecture<B: Backend>(
    model: &ResNet9<B>,
    config: &ResNet9Config,
) -> std::result::Result<(), String> {
    check_block("conv1", &model.conv1, config.in_channels, 64)?;
    check_block("conv2", &model.conv2, 64, 128)?;
    check_block("res1.first", &model.res1.first, 128, 128)?;
    check_block("res1.second", &model.res1.second, 128, 128)?;
    check_block("conv3", &model.conv3, 128, 256)?;
    check_block("conv4", &model.conv4, 256, 512)?;
    check_block("res2.first", &model.res2.first, 512, 512)?;
    check_block("res2.second", &model.res2.second, 512, 512)?;

    let head = model.classifier.weight.dims();
    if head != [512, config.num_classes] {
        return Err(format!(
            "classifier weight has shape {:?}, expected [512, {}]",
            head, config.num_classes
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn_ndarray::NdArray;
    use tempfile::TempDir;

    type TestBackend = NdArray;

    #[test]
    fn test_missing_file() {
        let device = Default::default();
        let err = load_model::<TestBackend>(
            Path::new("does/not/exist.mpk"),
            &ResNet9Config::new(),
            &device,
        )
        .unwrap_err();

        assert!(matches!(err, PredictError::ModelNotFound(_)));
        assert!(err.to_string().contains("Model file not found"));
    }

    #[test]
    fn test_pickle_checkpoint_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("plant-disease-model-complete.pth");
        std::fs::write(&path, b"PK\x03\x04").unwrap();

        let device = Default::default();
        let err = load_model::<TestBackend>(&path, &ResNet9Config::new(), &device).unwrap_err();

        assert!(matches!(err, PredictError::ModelLoad { .. }));
        assert!(err.to_string().contains("import_weights"));
    }

    #[test]
    fn test_corrupt_record() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.mpk");
        std::fs::write(&path, b"definitely not messagepack").unwrap();

        let device = Default::default();
        let err = load_model::<TestBackend>(&path, &ResNet9Config::new(), &device).unwrap_err();

        assert!(matches!(err, PredictError::ModelLoad { .. }));
    }

    #[test]
    fn test_save_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let device = Default::default();
        let config = ResNet9Config::new();
        let model = config.init::<TestBackend>(&device);

        let path = save_model(model, &temp_dir.path().join("model")).unwrap();
        assert_eq!(path.extension().unwrap(), "mpk");

        let loaded = load_model::<TestBackend>(&path, &config, &device).unwrap();
        assert_eq!(loaded.num_classes(), 38);
    }

    #[test]
    fn test_wrong_class_count_is_detected() {
        let temp_dir = TempDir::new().unwrap();
        let device = Default::default();
        let small = ResNet9Config::new().with_num_classes(10).init::<TestBackend>(&device);
        let path = save_model(small, &temp_dir.path().join("small")).unwrap();

        let err = load_model::<TestBackend>(&path, &ResNet9Config::new(), &device).unwrap_err();

        assert!(matches!(err, PredictError::ModelLoad { .. }));
    }
}
