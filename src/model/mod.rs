//! Model module: the ResNet9 network and its weight files
//!
//! - `resnet`: network definition
//! - `loader`: `.mpk` weight records
//! - `import`: conversion of PyTorch state dict dumps

pub mod import;
pub mod loader;
pub mod resnet;

// Re-export main types for convenience
pub use import::{import_state_dict, read_state_dict, StateDict, StateTensor};
pub use loader::{load_model, save_model, WeightsRecorder, WEIGHTS_EXTENSION};
pub use resnet::{ConvBlock, ResNet9, ResNet9Config, ResidualBlock};
