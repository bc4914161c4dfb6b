use image::{DynamicImage, RgbaImage, imageops::FilterType};
use std::path::Path;

use crate::detection::load_image;

/// Side of the square the selected image is fitted into on the home screen
pub const PREVIEW_SIZE: u32 = 300;
/// Side of the square the annotated image is fitted into on the results screen
pub const RESULT_SIZE: u32 = 350;

/// Scale an image to fit inside `max_width` x `max_height`, keeping its aspect ratio
pub fn fit_within(img: &DynamicImage, max_width: u32, max_height: u32) -> RgbaImage {
    img.resize(max_width, max_height, FilterType::Lanczos3)
        .to_rgba8()
}

/// Decode an image from disk and fit it into a `size` x `size` square
pub fn load_preview(path: &Path, size: u32) -> anyhow::Result<RgbaImage> {
    let img = load_image(path)?;
    Ok(fit_within(&img, size, size))
}
