//! Tests for config functionality.

use crate::config::types::{DEFAULT_FILENAME_TITLE_LIMIT, DEFAULT_OUTPUT_DIR};
use crate::config::{BaseArticle, Config, ExpertVoice};
use crate::error::PressError;
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.output_dir, DEFAULT_OUTPUT_DIR);
    assert_eq!(config.filename_title_limit, DEFAULT_FILENAME_TITLE_LIMIT);
    assert_eq!(config.base_article.author, "Stanislav Huseletov");
    assert_eq!(config.expert_voice.credentials, "AI workflow optimization expert");
    assert!(config.validate().is_ok());
}

#[test]
fn test_parse_minimal_yaml() {
    let config = Config::from_yaml("").unwrap();

    assert_eq!(config.output_dir, DEFAULT_OUTPUT_DIR);
    assert_eq!(config.base_article, BaseArticle::default());
    assert_eq!(config.expert_voice, ExpertVoice::default());
}

#[test]
fn test_parse_partial_yaml() {
    let yaml = r#"
output_dir: out/series
base_article:
  author: Someone Else
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.output_dir, "out/series");
    assert_eq!(config.base_article.author, "Someone Else");

    // Unspecified values inside a nested table keep their defaults
    assert_eq!(config.base_article.title, BaseArticle::default().title);
    assert_eq!(config.filename_title_limit, DEFAULT_FILENAME_TITLE_LIMIT);
}

#[test]
fn test_unknown_fields_are_ignored() {
    let yaml = r#"
output_dir: out
some_future_field: true
"#;
    let config = Config::from_yaml(yaml).unwrap();
    assert_eq!(config.output_dir, "out");
}

#[test]
fn test_rejects_zero_title_limit() {
    let err = Config::from_yaml("filename_title_limit: 0").unwrap_err();
    assert!(matches!(err, PressError::UserError(_)));
    assert!(err.to_string().contains("filename_title_limit"));
}

#[test]
fn test_rejects_empty_output_dir() {
    let err = Config::from_yaml("output_dir: \"  \"").unwrap_err();
    assert!(err.to_string().contains("output_dir"));
}

#[test]
fn test_rejects_empty_base_article_title() {
    let yaml = r#"
base_article:
  title: ""
"#;
    assert!(Config::from_yaml(yaml).is_err());
}

#[test]
fn test_invalid_yaml() {
    let err = Config::from_yaml("output_dir: [unclosed").unwrap_err();
    assert!(err.to_string().contains("failed to parse config YAML"));
}

#[test]
fn test_load_from_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("pingpong.yaml");
    std::fs::write(&path, "filename_title_limit: 20\n").unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.filename_title_limit, 20);
}

#[test]
fn test_load_missing_file() {
    let temp = TempDir::new().unwrap();
    let err = Config::load(temp.path().join("missing.yaml")).unwrap_err();
    assert!(err.to_string().contains("failed to read config file"));
}
