use image::RgbaImage;
use std::path::PathBuf;

use crate::descriptions;

/// Class name reported when the model finds nothing in the image
pub const NO_DETECTION: &str = "No disease detected";

/// A single detected box, in original image pixel coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    pub confidence: f32,
    pub class_id: usize,
    pub class_name: String,
}

impl Detection {
    pub fn width(&self) -> f32 {
        (self.x2 - self.x1).max(0.0)
    }

    pub fn height(&self) -> f32 {
        (self.y2 - self.y1).max(0.0)
    }

    pub fn area(&self) -> f32 {
        self.width() * self.height()
    }

    pub fn intersection_area(&self, other: &Detection) -> f32 {
        let x1 = self.x1.max(other.x1);
        let y1 = self.y1.max(other.y1);
        let x2 = self.x2.min(other.x2);
        let y2 = self.y2.min(other.y2);

        if x2 > x1 && y2 > y1 {
            (x2 - x1) * (y2 - y1)
        } else {
            0.0
        }
    }

    /// Intersection over union
    pub fn iou(&self, other: &Detection) -> f32 {
        let intersection = self.intersection_area(other);
        let union = self.area() + other.area() - intersection;

        if union > 0.0 {
            intersection / union
        } else {
            0.0
        }
    }
}

/// A (class name, confidence) pair as listed in the results view
#[derive(Debug, Clone, PartialEq)]
pub struct Finding {
    pub class_name: String,
    pub confidence: f32,
}

impl Finding {
    pub fn new(class_name: impl Into<String>, confidence: f32) -> Self {
        Self {
            class_name: class_name.into(),
            confidence,
        }
    }

    /// One results line, e.g. "Early Blight: 0.87"
    pub fn summary(&self) -> String {
        format!(
            "{}: {:.2}",
            descriptions::display_name(&self.class_name),
            self.confidence
        )
    }
}

/// Outcome of running the detector over one image
#[derive(Debug, Clone)]
pub struct Analysis {
    pub image_path: PathBuf,
    /// Original image with the detections drawn on it
    pub annotated: RgbaImage,
    /// Sorted by confidence, highest first
    pub detections: Vec<Detection>,
}

impl Analysis {
    pub fn findings(&self) -> Vec<Finding> {
        if self.detections.is_empty() {
            return vec![Finding::new(NO_DETECTION, 0.0)];
        }

        self.detections
            .iter()
            .map(|d| Finding::new(d.class_name.clone(), d.confidence))
            .collect()
    }

    /// Highest-confidence detection, if any
    pub fn primary(&self) -> Option<&Detection> {
        self.detections.first()
    }

    pub fn description(&self) -> String {
        match self.primary() {
            Some(detection) => descriptions::description_for(&detection.class_name),
            None => descriptions::NOTHING_DETECTED.to_string(),
        }
    }
}
