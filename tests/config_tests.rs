use hive_examples::ExampleError;
use hive_examples::cli::OutputFormat;
use hive_examples::config::ExamplesConfig;

#[test]
fn test_default_config() {
    let config = ExamplesConfig::default();

    assert_eq!(config.output.format, OutputFormat::Text);
    assert_eq!(config.logging.filter, "hive_examples=info");
    assert_eq!(config.logging.verbose_filter, "hive_examples=debug");
    assert_eq!(config.display.color, None);
    assert_eq!(config.display.list_id_width, 14);
}

#[tokio::test]
async fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = ExamplesConfig::load(&dir.path().join("absent.toml"))
        .await
        .unwrap();

    assert_eq!(config.output.format, OutputFormat::Text);
}

#[tokio::test]
async fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("examples.toml");
    std::fs::write(
        &path,
        "[output]\nformat = \"stream\"\n\n[display]\ncolor = false\n",
    )
    .unwrap();

    let config = ExamplesConfig::load(&path).await.unwrap();
    assert_eq!(config.output.format, OutputFormat::Stream);
    assert_eq!(config.display.color, Some(false));
    assert_eq!(config.display.list_id_width, 14);
}

#[tokio::test]
async fn test_malformed_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("examples.toml");
    std::fs::write(&path, "[output]\nformat = \"yaml\"\n").unwrap();

    let err = ExamplesConfig::load(&path).await.unwrap_err();
    assert!(matches!(err, ExampleError::ConfigParse { .. }));
    assert!(err.to_string().contains("examples.toml"));
}

#[tokio::test]
async fn test_invalid_values_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("examples.toml");
    std::fs::write(&path, "[display]\nlist_id_width = 0\n").unwrap();

    let err = ExamplesConfig::load(&path).await.unwrap_err();
    assert!(matches!(err, ExampleError::Config(_)));
}
