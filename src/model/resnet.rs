//! ResNet9 Architecture for Plant Disease Classification
//!
//! The layer layout (types, channel counts, order and residual adds) matches the
//! network the weights were trained with. Weights are bound to modules by
//! structure, so any change here breaks every existing weight file.
//!
//! Spatial sizes for a 256x256 input:
//! `conv1` 256 -> `conv2` 64 -> `res1` 64 -> `conv3` 16 -> `conv4` 4 -> `res2` 4 -> head 1

use burn::{
    config::Config,
    module::Module,
    nn::{
        conv::{Conv2d, Conv2dConfig},
        pool::{MaxPool2d, MaxPool2dConfig},
        BatchNorm, BatchNormConfig, Linear, LinearConfig, PaddingConfig2d, Relu,
    },
    tensor::{backend::Backend, Tensor},
};

/// Kernel and stride of every max-pool in the network
const POOL_SIZE: usize = 4;

/// Configuration for the ResNet9 classifier
#[derive(Config, Debug)]
pub struct ResNet9Config {
    /// Number of input channels (3 for RGB)
    #[config(default = "3")]
    pub in_channels: usize,

    /// Number of output classes
    #[config(default = "38")]
    pub num_classes: usize,
}

impl ResNet9Config {
    /// Initialize a model with freshly initialized parameters
    pub fn init<B: Backend>(&self, device: &B::Device) -> ResNet9<B> {
        ResNet9::new(self, device)
    }
}

fn max_pool() -> MaxPool2d {
    MaxPool2dConfig::new([POOL_SIZE, POOL_SIZE])
        .with_strides([POOL_SIZE, POOL_SIZE])
        .init()
}

/// Conv2d(3x3, padding 1) -> BatchNorm -> ReLU, with optional MaxPool(4)
#[derive(Module, Debug)]
pub struct ConvBlock<B: Backend> {
    pub conv: Conv2d<B>,
    pub bn: BatchNorm<B>,
    pub relu: Relu,
    pub pool: Option<MaxPool2d>,
}

impl<B: Backend> ConvBlock<B> {
    /// Create a new convolutional block
    pub fn new(in_channels: usize, out_channels: usize, with_pool: bool, device: &B::Device) -> Self {
        let conv = Conv2dConfig::new([in_channels, out_channels], [3, 3])
            .with_padding(PaddingConfig2d::Explicit(1, 1))
            .init(device);

        let bn = BatchNormConfig::new(out_channels).init(device);

        Self {
            conv,
            bn,
            relu: Relu::new(),
            pool: with_pool.then(max_pool),
        }
    }

    /// Forward pass through the block
    pub fn forward(&self, x: Tensor<B, 4>) -> Tensor<B, 4> {
        let x = self.conv.forward(x);
        let x = self.bn.forward(x);
        let x = self.relu.forward(x);

        match &self.pool {
            Some(pool) => pool.forward(x),
            None => x,
        }
    }
}

/// Two channel-preserving conv blocks whose output is added to their input
#[derive(Module, Debug)]
pub struct ResidualBlock<B: Backend> {
    pub first: ConvBlock<B>,
    pub second: ConvBlock<B>,
}

impl<B: Backend> ResidualBlock<B> {
    pub fn new(channels: usize, device: &B::Device) -> Self {
        Self {
            first: ConvBlock::new(channels, channels, false, device),
            second: ConvBlock::new(channels, channels, false, device),
        }
    }

    pub fn forward(&self, x: Tensor<B, 4>) -> Tensor<B, 4> {
        let out = self.first.forward(x.clone());
        let out = self.second.forward(out);
        out + x
    }
}

/// Plant Disease Classifier (ResNet9)
///
/// Architecture:
/// - `conv1`: 3 -> 64
/// - `conv2`: 64 -> 128, pool
/// - `res1`: 128 -> 128 -> 128, residual add
/// - `conv3`: 128 -> 256, pool
/// - `conv4`: 256 -> 512, pool
/// - `res2`: 512 -> 512 -> 512, residual add
/// - head: MaxPool(4) -> flatten -> Linear(512, num_classes)
#[derive(Module, Debug)]
pub struct ResNet9<B: Backend> {
    pub conv1: ConvBlock<B>,
    pub conv2: ConvBlock<B>,
    pub res1: ResidualBlock<B>,
    pub conv3: ConvBlock<B>,
    pub conv4: ConvBlock<B>,
    pub res2: ResidualBlock<B>,
    pub pool: MaxPool2d,
    pub classifier: Linear<B>,
}

impl<B: Backend> ResNet9<B> {
    /// Create a new ResNet9 from configuration
    pub fn new(config: &ResNet9Config, device: &B::Device) -> Self {
        Self {
            conv1: ConvBlock::new(config.in_channels, 64, false, device),
            conv2: ConvBlock::new(64, 128, true, device),
            res1: ResidualBlock::new(128, device),
            conv3: ConvBlock::new(128, 256, true, device),
            conv4: ConvBlock::new(256, 512, true, device),
            res2: ResidualBlock::new(512, device),
            pool: max_pool(),
            classifier: LinearConfig::new(512, config.num_classes).init(device),
        }
    }

    /// Forward pass through the network
    ///
    /// # Arguments
    /// * `x` - Input tensor of shape [batch_size, in_channels, 256, 256]
    ///
    /// # Returns
    /// * Logits tensor of shape [batch_size, num_classes]
    pub fn forward(&self, x: Tensor<B, 4>) -> Tensor<B, 2> {
        let x = self.conv1.forward(x);
        let x = self.conv2.forward(x);
        let x = self.res1.forward(x);
        let x = self.conv3.forward(x);
        let x = self.conv4.forward(x);
        let x = self.res2.forward(x);

        // [B, 512, 4, 4] -> [B, 512, 1, 1] -> [B, 512]
        let x = self.pool.forward(x);
        let x: Tensor<B, 2> = x.flatten(1, 3);

        self.classifier.forward(x)
    }

    /// Number of output classes
    pub fn num_classes(&self) -> usize {
        let [_, out] = self.classifier.weight.dims();
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn_ndarray::NdArray;

    type TestBackend = NdArray;

    #[test]
    fn test_conv_block_pool_shrinks_by_four() {
        let device = Default::default();
        let block = ConvBlock::<TestBackend>::new(3, 8, true, &device);
        let input = Tensor::<TestBackend, 4>::zeros([1, 3, 32, 32], &device);

        assert_eq!(block.forward(input).dims(), [1, 8, 8, 8]);
    }

    #[test]
    fn test_residual_block_preserves_shape() {
        let device = Default::default();
        let block = ResidualBlock::<TestBackend>::new(4, &device);
        let input = Tensor::<TestBackend, 4>::ones([2, 4, 6, 6], &device);

        assert_eq!(block.forward(input).dims(), [2, 4, 6, 6]);
    }

    #[test]
    fn test_resnet9_output_shape() {
        let device = Default::default();
        let model = ResNet9Config::new().init::<TestBackend>(&device);

        let input = Tensor::<TestBackend, 4>::zeros([1, 3, 256, 256], &device);
        let output = model.forward(input);

        assert_eq!(output.dims(), [1, 38]);
        assert_eq!(model.num_classes(), 38);
    }

    #[test]
    fn test_resnet9_batch_dimension() {
        let device = Default::default();
        let model = ResNet9Config::new().with_num_classes(5).init::<TestBackend>(&device);

        let input = Tensor::<TestBackend, 4>::zeros([2, 3, 256, 256], &device);

        assert_eq!(model.forward(input).dims(), [2, 5]);
    }
}
