use anyhow::Result;
use rten_tensor::NdTensorView;
use rten_tensor::prelude::*;
use std::cmp::Ordering;
use std::collections::HashMap;

use super::labels::Labels;
use super::preprocessing::Letterbox;
use crate::models::Detection;

/// Upper bound on boxes reported for one image
pub const MAX_DETECTIONS: usize = 300;

fn by_confidence_desc(a: &Detection, b: &Detection) -> Ordering {
    b.confidence
        .partial_cmp(&a.confidence)
        .unwrap_or(Ordering::Equal)
}

/// Per-class non-maximum suppression
pub fn nms(detections: Vec<Detection>, iou_threshold: f32) -> Vec<Detection> {
    if detections.is_empty() {
        return detections;
    }

    let mut class_groups: HashMap<usize, Vec<Detection>> = HashMap::new();
    for detection in detections {
        class_groups
            .entry(detection.class_id)
            .or_default()
            .push(detection);
    }

    let mut all_results = Vec::new();

    for (_, mut class_detections) in class_groups {
        class_detections.sort_by(by_confidence_desc);

        let mut suppressed = vec![false; class_detections.len()];
        for i in 0..class_detections.len() {
            if suppressed[i] {
                continue;
            }
            for j in (i + 1)..class_detections.len() {
                if !suppressed[j] && class_detections[i].iou(&class_detections[j]) > iou_threshold {
                    suppressed[j] = true;
                }
            }
        }

        all_results.extend(
            class_detections
                .into_iter()
                .zip(suppressed)
                .filter(|(_, suppressed)| !suppressed)
                .map(|(detection, _)| detection),
        );
    }

    all_results
}

/// Thresholds and geometry needed to decode one model output
#[derive(Debug, Clone, Copy)]
pub struct DecodeParams {
    pub confidence_threshold: f32,
    pub iou_threshold: f32,
    pub img_width: u32,
    pub img_height: u32,
    pub letterbox: Letterbox,
}

/// Decode a YOLOv8 output of shape [1, 4 + num_classes, num_boxes]
pub fn postprocess_output(
    output: NdTensorView<f32, 3>,
    labels: &Labels,
    params: &DecodeParams,
) -> Result<Vec<Detection>> {
    let [batch, rows, num_boxes] = output.shape();
    if batch != 1 {
        anyhow::bail!("Expected a batch size of 1, got {}", batch);
    }
    if rows < 5 {
        anyhow::bail!(
            "Expected at least 5 values per box (4 coordinates and a class score), got {}",
            rows
        );
    }
    let num_classes = rows - 4;
    let max_x = params.img_width as f32;
    let max_y = params.img_height as f32;

    let mut detections = Vec::new();
    for i in 0..num_boxes {
        let mut best_score = f32::MIN;
        let mut best_class = 0;
        for class_idx in 0..num_classes {
            let score = output[[0, 4 + class_idx, i]];
            if score > best_score {
                best_score = score;
                best_class = class_idx;
            }
        }

        if best_score <= params.confidence_threshold {
            continue;
        }

        let x_center = output[[0, 0, i]];
        let y_center = output[[0, 1, i]];
        let width = output[[0, 2, i]];
        let height = output[[0, 3, i]];

        let (x1, y1) = params
            .letterbox
            .to_original(x_center - width / 2.0, y_center - height / 2.0);
        let (x2, y2) = params
            .letterbox
            .to_original(x_center + width / 2.0, y_center + height / 2.0);

        detections.push(Detection {
            x1: x1.clamp(0.0, max_x),
            y1: y1.clamp(0.0, max_y),
            x2: x2.clamp(0.0, max_x),
            y2: y2.clamp(0.0, max_y),
            confidence: best_score,
            class_id: best_class,
            class_name: labels.name(best_class),
        });
    }

    let mut kept = nms(detections, params.iou_threshold);
    kept.sort_by(by_confidence_desc);
    kept.truncate(MAX_DETECTIONS);

    Ok(kept)
}
