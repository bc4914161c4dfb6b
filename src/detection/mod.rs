pub mod labels;
pub mod postprocessing;
pub mod preprocessing;

use anyhow::Context;
use image::{DynamicImage, ImageReader};
use log::{debug, info};
use rten::Model;
use rten_tensor::NdTensor;
use rten_tensor::prelude::*;
use std::path::Path;
use std::time::Instant;

use crate::annotate::Annotator;
use crate::config::DetectorConfig;
use crate::models::{Analysis, Detection};
use labels::Labels;
use postprocessing::DecodeParams;

/// Pretrained detection model plus everything needed to turn its output into detections
pub struct Detector {
    model: Model,
    labels: Labels,
    annotator: Annotator,
    config: DetectorConfig,
}

impl std::fmt::Debug for Detector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Detector")
            .field("model", &self.config.model)
            .field("labels", &self.labels.len())
            .finish_non_exhaustive()
    }
}

impl Detector {
    /// Load the model file and its labels
    pub fn load(config: &DetectorConfig) -> anyhow::Result<Self> {
        config.validate()?;

        if !config.model.exists() {
            anyhow::bail!("Model file not found: {}", config.model.display());
        }

        let started = Instant::now();
        let model = Model::load_file(&config.model).map_err(|e| {
            anyhow::anyhow!("Failed to load model {}: {}", config.model.display(), e)
        })?;
        info!(
            "Loaded model {} in {:.2?}",
            config.model.display(),
            started.elapsed()
        );

        let labels = match config.labels_path() {
            Some(path) => {
                let labels = Labels::load(&path)?;
                info!("Loaded {} class names from {}", labels.len(), path.display());
                labels
            }
            None => {
                info!("No labels file found, classes will be shown by id");
                Labels::default()
            }
        };

        let annotator = match &config.font {
            Some(path) => Annotator::with_font_file(path)?,
            None => Annotator::new(),
        };

        Ok(Self {
            model,
            labels,
            annotator,
            config: config.clone(),
        })
    }

    /// Run the model over an image, returning boxes sorted by confidence
    pub fn detect(&self, img: &DynamicImage) -> anyhow::Result<Vec<Detection>> {
        let (input, letterbox) = preprocessing::preprocess_image(img, self.config.input_size);

        let started = Instant::now();
        let output: NdTensor<f32, 3> = self
            .model
            .run_one(input.view().into(), None)
            .map_err(|e| anyhow::anyhow!("Model inference failed: {}", e))?
            .try_into()
            .map_err(|e| anyhow::anyhow!("Unexpected model output: {}", e))?;
        debug!(
            "Inference took {:.2?}, output shape {:?}",
            started.elapsed(),
            output.shape()
        );

        let params = DecodeParams {
            confidence_threshold: self.config.confidence,
            iou_threshold: self.config.iou,
            img_width: img.width(),
            img_height: img.height(),
            letterbox,
        };
        postprocessing::postprocess_output(output.view(), &self.labels, &params)
    }

    /// Decode the image at `path`, detect, and draw the results
    pub fn analyze(&self, path: &Path) -> anyhow::Result<Analysis> {
        let img = load_image(path)?;
        let detections = self.detect(&img)?;
        info!("{} detection(s) in {}", detections.len(), path.display());

        let annotated = self.annotator.annotate(&img, &detections);
        Ok(Analysis {
            image_path: path.to_path_buf(),
            annotated,
            detections,
        })
    }
}

pub fn load_image(path: &Path) -> anyhow::Result<DynamicImage> {
    ImageReader::open(path)
        .with_context(|| format!("Failed to open image {}", path.display()))?
        .with_guessed_format()
        .with_context(|| format!("Failed to read image {}", path.display()))?
        .decode()
        .map_err(|e| anyhow::anyhow!("Failed to decode image {}: {}", path.display(), e))
}
