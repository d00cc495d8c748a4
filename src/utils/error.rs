//! Error Handling Module
//!
//! Defines the error type for the prediction pipeline.
//! Uses thiserror for ergonomic error definitions. Every variant is fatal for
//! the current invocation; [`ErrorKind`] groups them for diagnostics.

use std::path::PathBuf;

use thiserror::Error;

/// Category of a [`PredictError`], used to label the final diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or invalid arguments, bad configuration
    Usage,
    /// Image or model file does not exist
    MissingFile,
    /// Model weights could not be deserialized
    Load,
    /// Image could not be opened or decoded
    Decode,
    /// Forward pass failed
    Inference,
    /// Class registry and lookup tables disagree
    Consistency,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Usage => write!(f, "usage"),
            ErrorKind::MissingFile => write!(f, "missing file"),
            ErrorKind::Load => write!(f, "model load"),
            ErrorKind::Decode => write!(f, "image decode"),
            ErrorKind::Inference => write!(f, "inference"),
            ErrorKind::Consistency => write!(f, "consistency"),
        }
    }
}

/// Main error type for prediction operations
#[derive(Error, Debug)]
pub enum PredictError {
    /// Invalid command line usage
    #[error("{0}")]
    Usage(String),

    /// Configuration file could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(String),

    /// The model weights file does not exist
    #[error("Model file not found at {}", .0.display())]
    ModelNotFound(PathBuf),

    /// The input image does not exist
    #[error("Image file not found at {}", .0.display())]
    ImageNotFound(PathBuf),

    /// Deserializing the weights failed
    #[error("Error loading model from '{}': {reason}", path.display())]
    ModelLoad { path: PathBuf, reason: String },

    /// A PyTorch state dict could not be converted
    #[error("Weight import error: {0}")]
    WeightImport(String),

    /// Decoding the image failed
    #[error("Error processing image '{}': {source}", path.display())]
    ImageDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The forward pass failed or produced unusable scores
    #[error("Error during prediction: {0}")]
    Inference(String),

    /// A class identifier is missing from a lookup table
    #[error("Class '{class}' has no entry in the {table} table")]
    MissingCatalogEntry {
        class: String,
        table: &'static str,
    },

    /// The predicted index is outside the class registry
    #[error("Predicted index {0} is outside the class registry")]
    UnknownClassIndex(usize),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PredictError {
    /// Taxonomy category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            PredictError::Usage(_) | PredictError::Config(_) => ErrorKind::Usage,
            PredictError::ModelNotFound(_) | PredictError::ImageNotFound(_) => {
                ErrorKind::MissingFile
            }
            PredictError::ModelLoad { .. } | PredictError::WeightImport(_) => ErrorKind::Load,
            PredictError::ImageDecode { .. } | PredictError::Io(_) => ErrorKind::Decode,
            PredictError::Inference(_) => ErrorKind::Inference,
            PredictError::MissingCatalogEntry { .. } | PredictError::UnknownClassIndex(_) => {
                ErrorKind::Consistency
            }
        }
    }

    /// Process exit code for this error
    ///
    /// The calling process only distinguishes success from failure.
    pub fn exit_code(&self) -> u8 {
        1
    }
}

/// Convenience Result type for prediction operations
pub type Result<T> = std::result::Result<T, PredictError>;
