//! PyTorch state dict import
//!
//! Converts a JSON dump of the trained network's `state_dict()` into a
//! [`ResNet9`]. Each entry is `{"shape": [...], "data": [...]}` keyed by the
//! PyTorch parameter name:
//!
//! | PyTorch key                         | Burn field                       |
//! |-------------------------------------|----------------------------------|
//! | `conv1.block.0.weight` / `.bias`    | `conv1.conv.weight` / `.bias`    |
//! | `conv1.block.1.weight` / `.bias`    | `conv1.bn.gamma` / `.beta`       |
//! | `conv1.block.1.running_mean`/`_var` | `conv1.bn.running_mean` / `_var` |
//! | `res1.0.block.*`, `res1.1.block.*`  | `res1.first.*`, `res1.second.*`  |
//! | `classifier.2.weight` (`[out, in]`) | `classifier.weight` (`[in, out]`)|
//! | `classifier.2.bias`                 | `classifier.bias`                |
//!
//! `num_batches_tracked` counters are training state and are skipped.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use burn::{
    module::{Param, RunningState},
    tensor::{backend::Backend, Tensor, TensorData},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::resnet::{ConvBlock, ResNet9, ResNet9Config};
use crate::utils::error::{PredictError, Result};

/// One tensor of a state dict dump
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateTensor {
    pub shape: Vec<usize>,
    pub data: Vec<f32>,
}

/// A state dict dump, keyed by PyTorch parameter name
pub type StateDict = BTreeMap<String, StateTensor>;

/// PyTorch prefixes of the conv blocks with their channel counts
fn block_layout(in_channels: usize) -> [(&'static str, usize, usize); 8] {
    [
        ("conv1.block", in_channels, 64),
        ("conv2.block", 64, 128),
        ("res1.0.block", 128, 128),
        ("res1.1.block", 128, 128),
        ("conv3.block", 128, 256),
        ("conv4.block", 256, 512),
        ("res2.0.block", 512, 512),
        ("res2.1.block", 512, 512),
    ]
}

const HEAD_WEIGHT: &str = "classifier.2.weight";
const HEAD_BIAS: &str = "classifier.2.bias";

/// Every key the importer consumes, in network order
pub fn expected_keys(config: &ResNet9Config) -> Vec<String> {
    let mut keys = Vec::new();
    for (prefix, _, _) in block_layout(config.in_channels) {
        for suffix in [
            "0.weight",
            "0.bias",
            "1.weight",
            "1.bias",
            "1.running_mean",
            "1.running_var",
        ] {
            keys.push(format!("{prefix}.{suffix}"));
        }
    }
    keys.push(HEAD_WEIGHT.to_string());
    keys.push(HEAD_BIAS.to_string());
    keys
}

/// Read a state dict dump from a JSON file
pub fn read_state_dict(path: &Path) -> Result<StateDict> {
    let json = std::fs::read_to_string(path)?;
    serde_json::from_str(&json).map_err(|e| {
        PredictError::WeightImport(format!("{} is not a state dict dump: {}", path.display(), e))
    })
}

fn tensor<B: Backend, const D: usize>(
    dict: &StateDict,
    key: &str,
    shape: [usize; D],
    device: &B::Device,
) -> Result<Tensor<B, D>> {
    let entry = dict
        .get(key)
        .ok_or_else(|| PredictError::WeightImport(format!("missing key '{key}'")))?;

    if entry.shape != shape {
        return Err(PredictError::WeightImport(format!(
            "'{key}' has shape {:?}, expected {:?}",
            entry.shape, shape
        )));
    }
    let expected_len: usize = shape.iter().product();
    if entry.data.len() != expected_len {
        return Err(PredictError::WeightImport(format!(
            "'{key}' holds {} values, shape {:?} needs {}",
            entry.data.len(),
            shape,
            expected_len
        )));
    }

    Ok(Tensor::from_data(
        TensorData::new(entry.data.clone(), shape),
        device,
    ))
}

fn bind_block<B: Backend>(
    mut block: ConvBlock<B>,
    dict: &StateDict,
    prefix: &str,
    in_channels: usize,
    out_channels: usize,
    device: &B::Device,
) -> Result<ConvBlock<B>> {
    let key = |suffix: &str| format!("{prefix}.{suffix}");

    block.conv.weight = Param::from_tensor(tensor(
        dict,
        &key("0.weight"),
        [out_channels, in_channels, 3, 3],
        device,
    )?);
    block.conv.bias = Some(Param::from_tensor(tensor(
        dict,
        &key("0.bias"),
        [out_channels],
        device,
    )?));

    block.bn.gamma = Param::from_tensor(tensor(dict, &key("1.weight"), [out_channels], device)?);
    block.bn.beta = Param::from_tensor(tensor(dict, &key("1.bias"), [out_channels], device)?);
    block.bn.running_mean =
        RunningState::new(tensor(dict, &key("1.running_mean"), [out_channels], device)?);
    block.bn.running_var =
        RunningState::new(tensor(dict, &key("1.running_var"), [out_channels], device)?);

    debug!("Bound {prefix} ({in_channels} -> {out_channels})");
    Ok(block)
}

/// Build a ResNet9 whose parameters come from `dict`
///
/// Missing keys and shape mismatches are errors. Unknown keys other than
/// `num_batches_tracked` are reported with a warning and ignored.
pub fn import_state_dict<B: Backend>(
    dict: &StateDict,
    config: &ResNet9Config,
    device: &B::Device,
) -> Result<ResNet9<B>> {
    let expected: BTreeSet<String> = expected_keys(config).into_iter().collect();

    let missing: Vec<&str> = expected
        .iter()
        .filter(|key| !dict.contains_key(*key))
        .map(String::as_str)
        .collect();
    if !missing.is_empty() {
        return Err(PredictError::WeightImport(format!(
            "{} missing keys: {}",
            missing.len(),
            missing.join(", ")
        )));
    }

    for key in dict.keys() {
        if !expected.contains(key) && !key.ends_with("num_batches_tracked") {
            warn!("Ignoring unexpected state dict key '{}'", key);
        }
    }

    let [conv1, conv2, res1_first, res1_second, conv3, conv4, res2_first, res2_second] =
        block_layout(config.in_channels);
    let bind = |block: ConvBlock<B>, (prefix, cin, cout): (&str, usize, usize)| {
        bind_block(block, dict, prefix, cin, cout, device)
    };

    let mut model = config.init::<B>(device);
    model.conv1 = bind(model.conv1, conv1)?;
    model.conv2 = bind(model.conv2, conv2)?;
    model.res1.first = bind(model.res1.first, res1_first)?;
    model.res1.second = bind(model.res1.second, res1_second)?;
    model.conv3 = bind(model.conv3, conv3)?;
    model.conv4 = bind(model.conv4, conv4)?;
    model.res2.first = bind(model.res2.first, res2_first)?;
    model.res2.second = bind(model.res2.second, res2_second)?;

    // PyTorch stores linear weights as [out, in]
    let head: Tensor<B, 2> = tensor(dict, HEAD_WEIGHT, [config.num_classes, 512], device)?;
    model.classifier.weight = Param::from_tensor(head.transpose());
    model.classifier.bias = Some(Param::from_tensor(tensor(
        dict,
        HEAD_BIAS,
        [config.num_classes],
        device,
    )?));

    Ok(model)
}
