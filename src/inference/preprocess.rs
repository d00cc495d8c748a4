//! Image preprocessing
//!
//! Decode -> RGB -> exact resize to 256x256 (bilinear) -> scale to [0, 1] -> CHW.
//! No mean/std normalization: the network was trained on raw `[0, 1]` pixels.

use std::path::Path;

use burn::tensor::{backend::Backend, Tensor, TensorData};
use image::{imageops::FilterType, DynamicImage, ImageError, ImageReader, RgbImage};

use crate::utils::error::{PredictError, Result};

/// Side length of the network input
pub const IMAGE_SIZE: usize = 256;

/// Open and decode an image, sniffing the format from its content
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    if !path.is_file() {
        return Err(PredictError::ImageNotFound(path.to_path_buf()));
    }

    let decode_error = |source: ImageError| PredictError::ImageDecode {
        path: path.to_path_buf(),
        source,
    };

    ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| decode_error(ImageError::IoError(e)))?
        .decode()
        .map_err(decode_error)
}

/// Convert to RGB and resize exactly to `size`x`size`, ignoring aspect ratio
pub fn resize_rgb(image: &DynamicImage, size: u32) -> RgbImage {
    let rgb = image.to_rgb8();
    image::imageops::resize(&rgb, size, size, FilterType::Triangle)
}

/// Flatten an RGB image to CHW floats in `[0, 1]`
/// Returns CHW layout: [C, H, W] flattened
pub fn to_chw(rgb: &RgbImage) -> Vec<f32> {
    let (width, height) = rgb.dimensions();
    let num_pixels = (width * height) as usize;

    let mut data = vec![0.0f32; 3 * num_pixels];
    for (i, pixel) in rgb.pixels().enumerate() {
        data[i] = pixel[0] as f32 / 255.0;
        data[num_pixels + i] = pixel[1] as f32 / 255.0;
        data[2 * num_pixels + i] = pixel[2] as f32 / 255.0;
    }

    data
}

/// Turn a decoded image into a `[1, 3, 256, 256]` input batch
pub fn image_to_tensor<B: Backend>(image: &DynamicImage, device: &B::Device) -> Tensor<B, 4> {
    let rgb = resize_rgb(image, IMAGE_SIZE as u32);
    let data = to_chw(&rgb);

    Tensor::from_data(
        TensorData::new(data, [1, 3, IMAGE_SIZE, IMAGE_SIZE]),
        device,
    )
}

/// Load an image file and turn it into a network input batch
pub fn preprocess<B: Backend>(path: &Path, device: &B::Device) -> Result<Tensor<B, 4>> {
    let image = load_image(path)?;
    Ok(image_to_tensor(&image, device))
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn_ndarray::NdArray;
    use image::{Rgb, Rgba, RgbaImage};
    use tempfile::TempDir;

    type TestBackend = NdArray;

    #[test]
    fn test_shape_is_fixed_for_any_aspect_ratio() {
        let device = Default::default();
        for (w, h) in [(100, 100), (640, 480), (31, 500), (256, 256), (1, 1)] {
            let img = DynamicImage::new_rgb8(w, h);
            let tensor = image_to_tensor::<TestBackend>(&img, &device);
            assert_eq!(tensor.dims(), [1, 3, 256, 256], "input {w}x{h}");
        }
    }

    #[test]
    fn test_values_are_scaled_to_unit_range() {
        let rgb = RgbImage::from_pixel(2, 2, Rgb([255, 0, 51]));
        let data = to_chw(&rgb);

        assert_eq!(data.len(), 12);
        assert!(data[0..4].iter().all(|&v| v == 1.0));
        assert!(data[4..8].iter().all(|&v| v == 0.0));
        assert!(data[8..12].iter().all(|&v| (v - 0.2).abs() < 1e-6));
    }

    #[test]
    fn test_chw_layout() {
        let mut rgb = RgbImage::new(2, 1);
        rgb.put_pixel(0, 0, Rgb([255, 0, 0]));
        rgb.put_pixel(1, 0, Rgb([0, 255, 0]));

        // R plane, then G plane, then B plane
        assert_eq!(to_chw(&rgb), vec![1.0, 0.0, 0.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_alpha_is_dropped() {
        let rgba = RgbaImage::from_pixel(4, 4, Rgba([10, 20, 30, 0]));
        let rgb = resize_rgb(&DynamicImage::ImageRgba8(rgba), 8);

        assert_eq!(rgb.dimensions(), (8, 8));
        assert_eq!(rgb.get_pixel(3, 3), &Rgb([10, 20, 30]));
    }

    #[test]
    fn test_grayscale_is_expanded() {
        let gray = DynamicImage::new_luma8(5, 5);
        let device = Default::default();

        assert_eq!(
            image_to_tensor::<TestBackend>(&gray, &device).dims(),
            [1, 3, 256, 256]
        );
    }

    #[test]
    fn test_missing_image() {
        let device = Default::default();
        let err = preprocess::<TestBackend>(Path::new("no/such/leaf.jpg"), &device).unwrap_err();
        assert!(matches!(err, PredictError::ImageNotFound(_)));
    }

    #[test]
    fn test_undecodable_image() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("leaf.jpg");
        std::fs::write(&path, b"this is not a jpeg").unwrap();

        let device = Default::default();
        let err = preprocess::<TestBackend>(&path, &device).unwrap_err();
        assert!(matches!(err, PredictError::ImageDecode { .. }));
    }

    #[test]
    fn test_format_is_sniffed_from_content() {
        let temp_dir = TempDir::new().unwrap();
        let png = temp_dir.path().join("leaf.png");
        RgbImage::from_pixel(3, 7, Rgb([0, 128, 0])).save(&png).unwrap();

        // Misleading extension, PNG bytes
        let renamed = temp_dir.path().join("leaf.jpg");
        std::fs::rename(&png, &renamed).unwrap();

        let image = load_image(&renamed).unwrap();
        assert_eq!((image.width(), image.height()), (3, 7));
    }

    #[test]
    fn test_deterministic() {
        let device = Default::default();
        let img = DynamicImage::ImageRgb8(RgbImage::from_fn(40, 30, |x, y| {
            Rgb([(x * 6) as u8, (y * 8) as u8, ((x + y) * 3) as u8])
        }));

        let a: Vec<f32> = image_to_tensor::<TestBackend>(&img, &device)
            .into_data()
            .to_vec()
            .unwrap();
        let b: Vec<f32> = image_to_tensor::<TestBackend>(&img, &device)
            .into_data()
            .to_vec()
            .unwrap();
        assert_eq!(a, b);
    }
}
