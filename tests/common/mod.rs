#![allow(dead_code)]

mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from leafscan for tests
pub use leafscan::detection::labels::Labels;
pub use leafscan::detection::postprocessing::{DecodeParams, MAX_DETECTIONS, nms, postprocess_output};
pub use leafscan::detection::preprocessing::Letterbox;
pub use leafscan::{Analysis, Detection, DetectorConfig, Finding};
