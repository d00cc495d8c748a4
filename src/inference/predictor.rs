//! Inference Predictor Module
//!
//! Runs the forward pass on a preprocessed batch of one image and picks the
//! highest scoring class.

use std::marker::PhantomData;

use burn::tensor::{backend::Backend, Tensor};
use tracing::debug;

use super::preprocess::IMAGE_SIZE;
use crate::catalog::{class_name, NUM_CLASSES};
use crate::model::ResNet9;
use crate::utils::catch_panic;
use crate::utils::error::{PredictError, Result};

/// Anything that maps a `[1, 3, H, W]` batch to `[1, num_classes]` scores
pub trait Classifier<B: Backend> {
    fn logits(&self, input: Tensor<B, 4>) -> Tensor<B, 2>;
}

impl<B: Backend> Classifier<B> for ResNet9<B> {
    fn logits(&self, input: Tensor<B, 4>) -> Tensor<B, 2> {
        self.forward(input)
    }
}

/// Result of a single prediction
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    /// Winning class index
    pub index: usize,

    /// Registry identifier of the winning class
    pub class_id: &'static str,

    /// Raw scores, one per class
    pub scores: Vec<f32>,
}

impl Prediction {
    /// Score of the winning class
    pub fn score(&self) -> f32 {
        self.scores[self.index]
    }
}

/// Index of the largest score; the lowest index wins ties
pub fn argmax(scores: &[f32]) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (i, &score) in scores.iter().enumerate() {
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((i, score)),
        }
    }
    best.map(|(i, _)| i)
}

/// Predictor wrapping a loaded classifier
pub struct Predictor<B: Backend, M: Classifier<B>> {
    model: M,
    _backend: PhantomData<B>,
}

impl<B: Backend, M: Classifier<B>> Predictor<B, M> {
    pub fn new(model: M) -> Self {
        Self {
            model,
            _backend: PhantomData,
        }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Classify a `[1, 3, 256, 256]` batch
    pub fn predict(&self, input: Tensor<B, 4>) -> Result<Prediction> {
        let dims = input.dims();
        if dims != [1, 3, IMAGE_SIZE, IMAGE_SIZE] {
            return Err(PredictError::Inference(format!(
                "input batch has shape {:?}, expected [1, 3, {IMAGE_SIZE}, {IMAGE_SIZE}]",
                dims
            )));
        }

        let output = catch_panic(|| self.model.logits(input)).map_err(PredictError::Inference)?;

        let out_dims = output.dims();
        if out_dims != [1, NUM_CLASSES] {
            return Err(PredictError::Inference(format!(
                "model produced scores of shape {:?}, expected [1, {NUM_CLASSES}]",
                out_dims
            )));
        }

        let scores: Vec<f32> = output
            .into_data()
            .convert::<f32>()
            .to_vec()
            .map_err(|e| PredictError::Inference(format!("{:?}", e)))?;

        if let Some(i) = scores.iter().position(|s| !s.is_finite()) {
            return Err(PredictError::Inference(format!(
                "score for class {i} is {}",
                scores[i]
            )));
        }

        let index = argmax(&scores)
            .ok_or_else(|| PredictError::Inference("model produced no scores".to_string()))?;
        let class_id = class_name(index).ok_or(PredictError::UnknownClassIndex(index))?;

        debug!("Top class {} ({}) with score {:.4}", index, class_id, scores[index]);

        Ok(Prediction {
            index,
            class_id,
            scores,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn::tensor::TensorData;
    use burn_ndarray::NdArray;

    type TestBackend = NdArray;

    /// Ignores its input and returns fixed scores
    struct FixedScores(Vec<f32>);

    impl<B: Backend> Classifier<B> for FixedScores {
        fn logits(&self, input: Tensor<B, 4>) -> Tensor<B, 2> {
            let device = input.device();
            let n = self.0.len();
            Tensor::from_data(TensorData::new(self.0.clone(), [1, n]), &device)
        }
    }

    struct Panics;

    impl<B: Backend> Classifier<B> for Panics {
        fn logits(&self, _input: Tensor<B, 4>) -> Tensor<B, 2> {
            panic!("weights do not fit")
        }
    }

    fn batch() -> Tensor<TestBackend, 4> {
        Tensor::zeros([1, 3, IMAGE_SIZE, IMAGE_SIZE], &Default::default())
    }

    fn one_hot(index: usize) -> Vec<f32> {
        let mut scores = vec![-1.0; NUM_CLASSES];
        scores[index] = 3.5;
        scores
    }

    #[test]
    fn test_argmax_first_index_wins_ties() {
        assert_eq!(argmax(&[0.1, 0.9, 0.9, 0.2]), Some(1));
        assert_eq!(argmax(&[-2.0, -1.0, -3.0]), Some(1));
        assert_eq!(argmax(&[5.0; 4]), Some(0));
        assert_eq!(argmax(&[]), None);
    }

    #[test]
    fn test_predicts_highest_score() {
        let predictor = Predictor::<TestBackend, _>::new(FixedScores(one_hot(37)));
        let prediction = predictor.predict(batch()).unwrap();

        assert_eq!(prediction.index, 37);
        assert_eq!(prediction.class_id, "Tomato___healthy");
        assert_eq!(prediction.score(), 3.5);
        assert_eq!(prediction.scores.len(), NUM_CLASSES);
    }

    #[test]
    fn test_tie_picks_lowest_index() {
        let mut scores = vec![0.0; NUM_CLASSES];
        scores[4] = 2.0;
        scores[20] = 2.0;
        let predictor = Predictor::<TestBackend, _>::new(FixedScores(scores));

        let prediction = predictor.predict(batch()).unwrap();
        assert_eq!(prediction.index, 4);
        assert_eq!(prediction.class_id, "Blueberry___healthy");
    }

    #[test]
    fn test_wrong_input_shape() {
        let predictor = Predictor::<TestBackend, _>::new(FixedScores(one_hot(0)));
        let input = Tensor::zeros([1, 3, 128, 128], &Default::default());

        let err = predictor.predict(input).unwrap_err();
        assert!(matches!(err, PredictError::Inference(_)));
    }

    #[test]
    fn test_wrong_score_width() {
        let predictor = Predictor::<TestBackend, _>::new(FixedScores(vec![1.0; 10]));
        let err = predictor.predict(batch()).unwrap_err();
        assert!(err.to_string().contains("[1, 38]"));
    }

    #[test]
    fn test_non_finite_scores_are_rejected() {
        let mut scores = one_hot(3);
        scores[11] = f32::NAN;
        let predictor = Predictor::<TestBackend, _>::new(FixedScores(scores));

        let err = predictor.predict(batch()).unwrap_err();
        assert!(matches!(err, PredictError::Inference(_)));
    }

    #[test]
    fn test_panicking_model_becomes_error() {
        let predictor = Predictor::<TestBackend, _>::new(Panics);
        let err = predictor.predict(batch()).unwrap_err();
        assert!(err.to_string().contains("weights do not fit"));
    }
}
