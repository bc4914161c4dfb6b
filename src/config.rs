use clap::Args;
use std::path::{Path, PathBuf};

pub const DEFAULT_MODEL_PATH: &str = "best.rten";
pub const DEFAULT_LABELS_FILE: &str = "labels.txt";

/// Detector settings, shared by the GUI and the `analyze` subcommand.
/// Every flag is global so it may come before or after the subcommand.
#[derive(Args, Debug, Clone, PartialEq)]
pub struct DetectorConfig {
    /// Path to the pretrained detection model (.rten)
    #[arg(
        long,
        global = true,
        value_name = "FILE",
        env = "LEAFSCAN_MODEL",
        default_value = DEFAULT_MODEL_PATH
    )]
    pub model: PathBuf,

    /// Class names, one per line (defaults to labels.txt next to the model)
    #[arg(long, global = true, value_name = "FILE", env = "LEAFSCAN_LABELS")]
    pub labels: Option<PathBuf>,

    /// Minimum class score for a box to be kept
    #[arg(long, global = true, default_value_t = 0.25)]
    pub confidence: f32,

    /// IoU above which overlapping boxes of the same class are suppressed
    #[arg(long, global = true, default_value_t = 0.7)]
    pub iou: f32,

    /// Square input size the model was exported with
    #[arg(long, global = true, default_value_t = 640)]
    pub input_size: u32,

    /// TrueType font for box labels, replacing the bundled one
    #[arg(long, global = true, value_name = "FILE", env = "LEAFSCAN_FONT")]
    pub font: Option<PathBuf>,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            model: PathBuf::from(DEFAULT_MODEL_PATH),
            labels: None,
            confidence: 0.25,
            iou: 0.7,
            input_size: 640,
            font: None,
        }
    }
}

impl DetectorConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        if !(0.0..=1.0).contains(&self.confidence) {
            anyhow::bail!(
                "Confidence threshold must be between 0 and 1, got {}",
                self.confidence
            );
        }
        if !(0.0..=1.0).contains(&self.iou) {
            anyhow::bail!("IoU threshold must be between 0 and 1, got {}", self.iou);
        }
        if self.input_size == 0 {
            anyhow::bail!("Input size must be greater than zero");
        }
        Ok(())
    }

    /// Labels file to read: the configured one, else labels.txt beside the model if it exists
    pub fn labels_path(&self) -> Option<PathBuf> {
        if let Some(path) = &self.labels {
            return Some(path.clone());
        }

        let sibling = self
            .model
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .join(DEFAULT_LABELS_FILE);
        sibling.exists().then_some(sibling)
    }
}
