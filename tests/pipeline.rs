//! Library pipeline with a stand-in classifier

use burn::tensor::{backend::Backend, Tensor, TensorData};
use burn_ndarray::NdArray;
use image::{Rgb, RgbImage};
use tempfile::TempDir;

use plantvillage_predict::inference::{diagnose_with, Classifier, Diagnosis, Predictor};
use plantvillage_predict::{class_index, PredictError, CLASS_NAMES, NUM_CLASSES};

type TestBackend = NdArray;

/// Puts the highest score on a fixed class
struct Favours(usize);

impl<B: Backend> Classifier<B> for Favours {
    fn logits(&self, input: Tensor<B, 4>) -> Tensor<B, 2> {
        let mut scores = vec![0.0f32; NUM_CLASSES];
        scores[self.0] = 10.0;
        Tensor::from_data(TensorData::new(scores, [1, NUM_CLASSES]), &input.device())
    }
}

fn leaf(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("leaf.png");
    RgbImage::from_pixel(64, 48, Rgb([40, 160, 60]))
        .save(&path)
        .unwrap();
    path
}

#[test]
fn tomato_healthy() {
    let dir = TempDir::new().unwrap();
    let index = class_index("Tomato___healthy").unwrap();
    let predictor = Predictor::<TestBackend, _>::new(Favours(index));

    let diagnosis = diagnose_with(&predictor, &leaf(&dir), &Default::default()).unwrap();

    assert_eq!(diagnosis.prediction, "Cà chua khỏe mạnh");
    assert_eq!(
        diagnosis.solutions,
        vec!["Tiếp tục chăm sóc tốt, tưới nước đều, bón phân cân đối và kiểm tra sâu bệnh."]
    );
}

#[test]
fn corn_common_rust_has_four_remedies() {
    let dir = TempDir::new().unwrap();
    let index = class_index("Corn_(maize)___Common_rust_").unwrap();
    let predictor = Predictor::<TestBackend, _>::new(Favours(index));

    let diagnosis = diagnose_with(&predictor, &leaf(&dir), &Default::default()).unwrap();

    assert_eq!(diagnosis.prediction, "Rỉ sắt thông thường ngô");
    assert_eq!(diagnosis.solutions.len(), 4);
}

#[test]
fn every_class_resolves_end_to_end() {
    let dir = TempDir::new().unwrap();
    let image = leaf(&dir);

    for (index, class) in CLASS_NAMES.iter().enumerate() {
        let predictor = Predictor::<TestBackend, _>::new(Favours(index));
        let diagnosis = diagnose_with(&predictor, &image, &Default::default()).unwrap();
        assert_eq!(diagnosis, Diagnosis::resolve(class).unwrap());
    }
}

#[test]
fn missing_image() {
    let dir = TempDir::new().unwrap();
    let predictor = Predictor::<TestBackend, _>::new(Favours(0));

    let err = diagnose_with(&predictor, &dir.path().join("nope.png"), &Default::default())
        .unwrap_err();
    assert!(matches!(err, PredictError::ImageNotFound(_)));
}
