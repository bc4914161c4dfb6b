use image::{ImageBuffer, Rgb};
use leafscan::Detection;
use rten_tensor::NdTensor;
use tempfile::NamedTempFile;

/// Creates a solid-colour PNG of the given size and returns the temp file.
/// The file will be automatically cleaned up when dropped.
pub fn create_test_image(width: u32, height: u32, color: [u8; 3]) -> NamedTempFile {
    let img = ImageBuffer::from_fn(width, height, |_, _| Rgb(color));
    let file = tempfile::Builder::new()
        .suffix(".png")
        .tempfile()
        .expect("Failed to create temp image file");
    img.save_with_format(file.path(), image::ImageFormat::Png)
        .expect("Failed to save test image");
    file
}

/// One raw box as the model emits it, in model input coordinates
pub struct RawBox {
    pub cx: f32,
    pub cy: f32,
    pub w: f32,
    pub h: f32,
    pub class_id: usize,
    pub score: f32,
}

/// Builds a [1, 4 + num_classes, boxes.len()] tensor in YOLOv8 layout
pub fn yolo_output(num_classes: usize, boxes: &[RawBox]) -> NdTensor<f32, 3> {
    let mut output = NdTensor::zeros([1, 4 + num_classes, boxes.len()]);
    for (i, b) in boxes.iter().enumerate() {
        output[[0, 0, i]] = b.cx;
        output[[0, 1, i]] = b.cy;
        output[[0, 2, i]] = b.w;
        output[[0, 3, i]] = b.h;
        output[[0, 4 + b.class_id, i]] = b.score;
    }
    output
}

/// Creates a Detection with the given corners
pub fn make_detection(
    corners: (f32, f32, f32, f32),
    confidence: f32,
    class_id: usize,
    class_name: &str,
) -> Detection {
    let (x1, y1, x2, y2) = corners;
    Detection {
        x1,
        y1,
        x2,
        y2,
        confidence,
        class_id,
        class_name: class_name.to_string(),
    }
}

/// Class names used across tests
pub const TEST_LABELS: &str = "healthy\nearly_blight\nlate_blight\n";
