mod common;

use clap::Parser;
use common::*;
use leafscan::Detector;
use std::path::PathBuf;

#[derive(Parser)]
struct TestCli {
    #[command(flatten)]
    detector: DetectorConfig,
}

#[derive(Parser)]
struct TestCliWithCommand {
    #[command(flatten)]
    detector: DetectorConfig,

    #[command(subcommand)]
    command: Option<TestCommand>,
}

#[derive(clap::Subcommand)]
enum TestCommand {
    Analyze { image_path: PathBuf },
}

#[test]
fn test_defaults() {
    let cli = TestCli::try_parse_from(["leafscan"]).unwrap();

    // Environment may override the model path; compare the rest
    assert_eq!(cli.detector.confidence, 0.25);
    assert_eq!(cli.detector.iou, 0.7);
    assert_eq!(cli.detector.input_size, 640);
    assert!(cli.detector.validate().is_ok());
}

#[test]
fn test_flags_override_defaults() {
    let cli = TestCli::try_parse_from([
        "leafscan",
        "--model",
        "models/leaf.rten",
        "--confidence",
        "0.5",
        "--iou",
        "0.45",
        "--input-size",
        "320",
    ])
    .unwrap();

    assert_eq!(cli.detector.model, PathBuf::from("models/leaf.rten"));
    assert_eq!(cli.detector.confidence, 0.5);
    assert_eq!(cli.detector.iou, 0.45);
    assert_eq!(cli.detector.input_size, 320);
}

#[test]
fn test_validate_rejects_out_of_range() {
    let config = DetectorConfig {
        confidence: 1.5,
        ..DetectorConfig::default()
    };
    assert!(config.validate().is_err());

    let config = DetectorConfig {
        iou: -0.1,
        ..DetectorConfig::default()
    };
    assert!(config.validate().is_err());

    let config = DetectorConfig {
        input_size: 0,
        ..DetectorConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_labels_path_prefers_explicit() {
    let config = DetectorConfig {
        labels: Some(PathBuf::from("my-labels.txt")),
        ..DetectorConfig::default()
    };

    assert_eq!(config.labels_path(), Some(PathBuf::from("my-labels.txt")));
}

#[test]
fn test_labels_path_finds_sibling() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let model = dir.path().join("best.rten");
    let config = DetectorConfig {
        model: model.clone(),
        ..DetectorConfig::default()
    };
    assert_eq!(config.labels_path(), None);

    std::fs::write(dir.path().join("labels.txt"), TEST_LABELS)?;
    assert_eq!(config.labels_path(), Some(dir.path().join("labels.txt")));
    Ok(())
}

#[test]
fn test_missing_model_names_the_path() {
    let config = DetectorConfig {
        model: PathBuf::from("/nonexistent/best.rten"),
        ..DetectorConfig::default()
    };

    let err = Detector::load(&config).unwrap_err();

    assert!(err.to_string().contains("/nonexistent/best.rten"));
}

#[test]
fn test_corrupt_model_is_an_error() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let model = dir.path().join("best.rten");
    std::fs::write(&model, b"not a model")?;

    let config = DetectorConfig {
        model,
        ..DetectorConfig::default()
    };

    assert!(Detector::load(&config).is_err());
    Ok(())
}

#[test]
fn test_flags_accepted_after_subcommand() {
    let cli = TestCliWithCommand::try_parse_from([
        "leafscan",
        "analyze",
        "leaf.jpg",
        "--model",
        "m.rten",
        "--confidence",
        "0.4",
    ])
    .unwrap();

    assert_eq!(cli.detector.model, PathBuf::from("m.rten"));
    assert_eq!(cli.detector.confidence, 0.4);
    assert!(matches!(
        cli.command,
        Some(TestCommand::Analyze { image_path }) if image_path == PathBuf::from("leaf.jpg")
    ));
}
