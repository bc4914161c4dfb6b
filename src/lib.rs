pub mod annotate;
pub mod config;
pub mod descriptions;
pub mod detection;
pub mod models;
pub mod preview;

pub use config::DetectorConfig;
pub use detection::Detector;
pub use models::{Analysis, Detection, Finding};

#[cfg(feature = "gui")]
pub mod gui;
