use ab_glyph::{FontArc, FontVec, PxScale};
use anyhow::Context;
use image::{DynamicImage, Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_rect_mut, draw_text_mut, text_size};
use imageproc::rect::Rect;
use log::warn;
use std::path::Path;

use crate::models::Detection;

static FONT_BYTES: &[u8] = include_bytes!("../fonts/DejaVuSans.ttf");

const PALETTE: [[u8; 3]; 12] = [
    [255, 56, 56],
    [255, 157, 151],
    [255, 112, 31],
    [255, 178, 29],
    [207, 210, 49],
    [72, 249, 10],
    [146, 204, 23],
    [61, 219, 134],
    [26, 147, 52],
    [0, 212, 187],
    [44, 153, 168],
    [0, 194, 255],
];

/// Box colour for a class id
pub fn class_color(class_id: usize) -> Rgba<u8> {
    let [r, g, b] = PALETTE[class_id % PALETTE.len()];
    Rgba([r, g, b, 255])
}

/// Line width for an image, growing with its size
pub fn line_width(width: u32, height: u32) -> u32 {
    let scaled = ((width + height) as f32 / 2.0 * 0.003).round() as u32;
    scaled.max(2)
}

/// Draws detections onto a copy of an image
pub struct Annotator {
    font: Option<FontArc>,
}

impl Annotator {
    /// Annotator using the bundled font for box labels
    pub fn new() -> Self {
        let font = match FontArc::try_from_slice(FONT_BYTES) {
            Ok(font) => Some(font),
            Err(e) => {
                warn!("Bundled font failed to load, boxes will be unlabelled: {}", e);
                None
            }
        };
        Self { font }
    }

    pub fn with_font_file(path: &Path) -> anyhow::Result<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read font {}", path.display()))?;
        let font = FontVec::try_from_vec(bytes)
            .map_err(|e| anyhow::anyhow!("Invalid font {}: {}", path.display(), e))?;
        Ok(Self {
            font: Some(FontArc::new(font)),
        })
    }

    pub fn has_font(&self) -> bool {
        self.font.is_some()
    }

    pub fn annotate(&self, img: &DynamicImage, detections: &[Detection]) -> RgbaImage {
        let mut canvas = img.to_rgba8();
        let thickness = line_width(canvas.width(), canvas.height());

        for detection in detections {
            let color = class_color(detection.class_id);
            let x1 = detection.x1.max(0.0) as u32;
            let y1 = detection.y1.max(0.0) as u32;
            let x2 = (detection.x2.min(canvas.width() as f32) as u32).max(x1 + 1);
            let y2 = (detection.y2.min(canvas.height() as f32) as u32).max(y1 + 1);

            // Grow inwards so boxes touching the border stay visible
            for offset in 0..thickness {
                let w = (x2 - x1).saturating_sub(2 * offset);
                let h = (y2 - y1).saturating_sub(2 * offset);
                if w == 0 || h == 0 {
                    break;
                }
                let rect = Rect::at((x1 + offset) as i32, (y1 + offset) as i32).of_size(w, h);
                draw_hollow_rect_mut(&mut canvas, rect, color);
            }

            if let Some(font) = &self.font {
                draw_label(&mut canvas, font, detection, x1, y1, thickness, color);
            }
        }

        canvas
    }
}

impl Default for Annotator {
    fn default() -> Self {
        Self::new()
    }
}

fn draw_label(
    canvas: &mut RgbaImage,
    font: &FontArc,
    detection: &Detection,
    x: u32,
    y: u32,
    thickness: u32,
    color: Rgba<u8>,
) {
    let label = format!("{} {:.2}", detection.class_name, detection.confidence);
    let scale = PxScale::from((thickness * 8) as f32);
    let (text_w, text_h) = text_size(scale, font, &label);
    let pad = thickness;
    let tag_h = text_h + 2 * pad;

    // Above the box when it fits, otherwise just inside the top edge
    let tag_y = if y >= tag_h { y - tag_h } else { y };
    let tag = Rect::at(x as i32, tag_y as i32).of_size(text_w + 2 * pad, tag_h);
    draw_filled_rect_mut(canvas, tag, color);
    draw_text_mut(
        canvas,
        Rgba([255, 255, 255, 255]),
        (x + pad) as i32,
        (tag_y + pad) as i32,
        scale,
        font,
        &label,
    );
}
