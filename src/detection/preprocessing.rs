use image::{DynamicImage, Rgb, RgbImage};
use rten_tensor::NdTensor;

/// Gray used to pad the letterboxed input
pub const PAD_VALUE: u8 = 114;

/// How the original image was placed inside the square model input
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Letterbox {
    pub scale: f32,
    pub pad_x: f32,
    pub pad_y: f32,
}

impl Letterbox {
    pub fn new(width: u32, height: u32, target_size: u32) -> Self {
        let max_dim = width.max(height).max(1);
        let scale = target_size as f32 / max_dim as f32;
        let new_width = scaled_dim(width, scale, target_size);
        let new_height = scaled_dim(height, scale, target_size);

        Self {
            scale,
            pad_x: ((target_size - new_width) / 2) as f32,
            pad_y: ((target_size - new_height) / 2) as f32,
        }
    }

    /// Map a point from model input space back to original image space
    pub fn to_original(&self, x: f32, y: f32) -> (f32, f32) {
        ((x - self.pad_x) / self.scale, (y - self.pad_y) / self.scale)
    }
}

fn scaled_dim(dim: u32, scale: f32, target_size: u32) -> u32 {
    ((dim as f32 * scale).round() as u32).clamp(1, target_size)
}

/// Letterbox an image to `target_size` x `target_size`
pub fn letterbox(img: &DynamicImage, target_size: u32) -> (RgbImage, Letterbox) {
    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();
    let placement = Letterbox::new(width, height, target_size);

    let new_width = scaled_dim(width, placement.scale, target_size);
    let new_height = scaled_dim(height, placement.scale, target_size);
    let resized = image::imageops::resize(
        &rgb,
        new_width,
        new_height,
        image::imageops::FilterType::Triangle,
    );

    let mut canvas = RgbImage::from_pixel(target_size, target_size, Rgb([PAD_VALUE; 3]));
    image::imageops::overlay(
        &mut canvas,
        &resized,
        placement.pad_x as i64,
        placement.pad_y as i64,
    );

    (canvas, placement)
}

/// Build the NCHW model input, normalised to [0, 1]
pub fn preprocess_image(img: &DynamicImage, target_size: u32) -> (NdTensor<f32, 4>, Letterbox) {
    let (canvas, placement) = letterbox(img, target_size);
    let size = target_size as usize;

    let mut data = Vec::with_capacity(3 * size * size);
    for c in 0..3 {
        for pixel in canvas.pixels() {
            data.push(pixel[c] as f32 / 255.0);
        }
    }

    (NdTensor::from_data([1, 3, size, size], data), placement)
}
