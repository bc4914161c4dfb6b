mod common;

use common::*;

#[test]
fn test_parse_skips_blanks_and_comments() {
    let labels = Labels::parse("# classes\nhealthy\n\n  early_blight  \n# end\nlate_blight\n");

    assert_eq!(labels.len(), 3);
    assert_eq!(labels.name(0), "healthy");
    assert_eq!(labels.name(1), "early_blight");
    assert_eq!(labels.name(2), "late_blight");
}

#[test]
fn test_missing_id_falls_back() {
    let labels = Labels::parse(TEST_LABELS);

    assert_eq!(labels.name(7), "class_7");
    assert_eq!(Labels::default().name(0), "class_0");
}

#[test]
fn test_load_from_file() -> anyhow::Result<()> {
    let file = tempfile::NamedTempFile::new()?;
    std::fs::write(file.path(), TEST_LABELS)?;

    let labels = Labels::load(file.path())?;

    assert_eq!(labels, Labels::parse(TEST_LABELS));
    Ok(())
}

#[test]
fn test_load_missing_file_is_an_error() {
    let result = Labels::load(std::path::Path::new("/nonexistent/labels.txt"));

    assert!(result.is_err());
}
