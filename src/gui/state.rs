use iced::widget::image::Handle;
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::DetectorConfig;
use crate::detection::Detector;
use crate::preview::{PREVIEW_SIZE, load_preview};

/// The one image currently picked for analysis
#[derive(Debug, Clone)]
pub struct SelectedImage {
    pub path: PathBuf,
    pub preview: Handle,
}

impl SelectedImage {
    pub fn load(path: PathBuf) -> anyhow::Result<Self> {
        let preview = load_preview(&path, PREVIEW_SIZE)?;
        let (width, height) = preview.dimensions();
        Ok(Self {
            path,
            preview: Handle::from_rgba(width, height, preview.into_raw()),
        })
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

#[derive(Debug)]
pub struct AppState {
    pub config: DetectorConfig,
    /// `None` until loaded, and for good if loading failed
    pub detector: Option<Arc<Detector>>,
    pub selected: Option<SelectedImage>,
    /// Set from Browse until the picked image is decoded or the dialog is cancelled
    pub loading_preview: bool,
    /// Set while an analysis is in flight
    pub analyzing: bool,
}

impl AppState {
    pub fn new(config: DetectorConfig) -> Self {
        Self {
            config,
            detector: None,
            selected: None,
            loading_preview: false,
            analyzing: false,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.loading_preview || self.analyzing
    }

    pub fn can_analyze(&self) -> bool {
        self.selected.is_some() && !self.is_busy()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DetectorConfig::default())
    }
}
