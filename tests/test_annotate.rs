mod common;

use common::*;
use image::{DynamicImage, Rgba, RgbaImage};
use leafscan::annotate::{Annotator, class_color, line_width};

fn gray_image(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_pixel(
        width,
        height,
        Rgba([128, 128, 128, 255]),
    ))
}

#[test]
fn test_line_width_has_minimum() {
    assert_eq!(line_width(100, 100), 2);
    assert_eq!(line_width(2000, 2000), 6);
}

#[test]
fn test_palette_wraps() {
    assert_eq!(class_color(0), class_color(12));
    assert_ne!(class_color(0), class_color(1));
}

#[test]
fn test_box_edges_are_drawn() {
    let img = gray_image(200, 200);
    let detection = make_detection((50.0, 60.0, 150.0, 160.0), 0.9, 1, "early_blight");

    let annotated = Annotator::new().annotate(&img, &[detection]);

    let color = class_color(1);
    assert_eq!(annotated.dimensions(), (200, 200));
    assert_eq!(annotated.get_pixel(50, 100), &color);
    assert_eq!(annotated.get_pixel(51, 100), &color);
    assert_eq!(annotated.get_pixel(100, 60), &color);
    // Interior and outside untouched
    assert_eq!(annotated.get_pixel(100, 100), &Rgba([128, 128, 128, 255]));
    assert_eq!(annotated.get_pixel(10, 10), &Rgba([128, 128, 128, 255]));
}

#[test]
fn test_no_detections_leaves_image_unchanged() {
    let img = gray_image(40, 30);

    let annotated = Annotator::new().annotate(&img, &[]);

    assert_eq!(annotated, img.to_rgba8());
}

#[test]
fn test_box_touching_border_is_visible() {
    let img = gray_image(100, 100);
    let detection = make_detection((0.0, 0.0, 100.0, 100.0), 0.5, 0, "healthy");

    let annotated = Annotator::new().annotate(&img, &[detection]);

    assert_eq!(annotated.get_pixel(0, 50), &class_color(0));
    assert_eq!(annotated.get_pixel(99, 50), &class_color(0));
}

#[test]
fn test_missing_font_is_an_error() {
    let result = Annotator::with_font_file(std::path::Path::new("/nonexistent/font.ttf"));

    assert!(result.is_err());
}

#[test]
fn test_invalid_font_is_an_error() -> anyhow::Result<()> {
    let file = tempfile::NamedTempFile::new()?;
    std::fs::write(file.path(), b"not a font")?;

    assert!(Annotator::with_font_file(file.path()).is_err());
    Ok(())
}

#[test]
fn test_bundled_font_is_used_by_default() {
    assert!(Annotator::new().has_font());
    assert!(Annotator::default().has_font());
}

#[test]
fn test_label_tag_drawn_above_box() {
    let img = gray_image(200, 200);
    let detection = make_detection((50.0, 60.0, 150.0, 160.0), 0.91, 1, "early_blight");

    let annotated = Annotator::new().annotate(&img, &[detection]);

    let gray = Rgba([128, 128, 128, 255]);
    // Tag sits on the top edge, starting at the box's left side
    assert_eq!(annotated.get_pixel(50, 59), &class_color(1));
    assert_ne!(annotated.get_pixel(100, 55), &gray);
    // Nothing spills into the box interior
    assert_eq!(annotated.get_pixel(100, 100), &gray);
}

#[test]
fn test_label_tag_moves_inside_when_no_room_above() {
    let img = gray_image(200, 200);
    let detection = make_detection((10.0, 5.0, 190.0, 190.0), 0.91, 1, "early_blight");

    let annotated = Annotator::new().annotate(&img, &[detection]);

    let gray = Rgba([128, 128, 128, 255]);
    for y in 0..5 {
        for x in 0..200 {
            assert_eq!(annotated.get_pixel(x, y), &gray, "pixel ({}, {})", x, y);
        }
    }
    // Below the two-pixel top edge, inside the box, now covered by the tag
    assert_ne!(annotated.get_pixel(30, 9), &gray);
    assert_eq!(annotated.get_pixel(100, 150), &gray);
}

#[test]
fn test_font_file_replaces_bundled_font() -> anyhow::Result<()> {
    let file = tempfile::NamedTempFile::new()?;
    std::fs::write(
        file.path(),
        include_bytes!("../fonts/DejaVuSans.ttf").as_slice(),
    )?;

    let annotator = Annotator::with_font_file(file.path())?;

    assert!(annotator.has_font());
    Ok(())
}
