//! Tests for the topic catalog.

use super::*;
use crate::composer::SKEPTIC_PLACEHOLDER;
use std::collections::HashSet;
use tempfile::TempDir;

#[test]
fn test_builtin_has_ten_topics() {
    assert_eq!(list_topics().len(), 10);
    assert_eq!(Catalog::builtin().len(), 10);
}

#[test]
fn test_ids_are_contiguous_from_one() {
    let topics = list_topics();
    let ids: Vec<u32> = topics.iter().map(|t| t.id).collect();
    let expected: Vec<u32> = (1..=topics.len() as u32).collect();
    assert_eq!(ids, expected);

    let unique: HashSet<u32> = ids.iter().copied().collect();
    assert_eq!(unique.len(), ids.len());
}

#[test]
fn test_list_is_restartable() {
    assert_eq!(list_topics(), list_topics());
}

#[test]
fn test_builtin_topics_are_complete() {
    for topic in list_topics() {
        topic.validate().unwrap();
    }
}

#[test]
fn test_builtin_first_and_last() {
    let topics = list_topics();
    assert_eq!(topics[0].domain, "Metaphysics & AI");
    assert!(topics[0].title.starts_with("The AI Trinity"));
    assert_eq!(topics[9].domain, "Linguistics & Communication");
    assert!(topics[9].thesis.starts_with("single-model translation fails"));
}

#[test]
fn test_validate_rejects_missing_field() {
    let mut topic = list_topics().remove(2);
    topic.thesis = "   ".to_string();

    let err = topic.validate().unwrap_err();
    assert!(matches!(err, PressError::DataValidation(_)));
    assert_eq!(
        err.to_string(),
        "invalid topic data: topic 3 is missing required field 'thesis'"
    );
}

#[test]
fn test_validate_rejects_reserved_tokens() {
    let mut topic = list_topics().remove(0);
    topic.question = format!("Why {}?", SKEPTIC_PLACEHOLDER);

    let err = topic.validate().unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid topic data: topic 1 field 'question' contains reserved token [SKEPTIC_PLACEHOLDER]"
    );
}

#[test]
fn test_validate_rejects_zero_id() {
    let mut topic = list_topics().remove(0);
    topic.id = 0;
    assert!(matches!(
        topic.validate(),
        Err(PressError::DataValidation(_))
    ));
}

#[test]
fn test_from_records_rejects_gap() {
    let mut topics = list_topics();
    topics.remove(4);

    let err = Catalog::from_records(topics).unwrap_err();
    assert!(err.to_string().contains("found id 6 at position 5"));
}

#[test]
fn test_from_records_rejects_empty() {
    assert!(Catalog::from_records(Vec::new()).is_err());
}

#[test]
fn test_from_json_fills_missing_fields_with_empty() {
    let json = r#"[
        {"id": 1, "title": "X", "domain": "Testing", "question": "Q?", "thesis": "T"},
        {"id": 2, "title": "Y", "domain": "Testing"}
    ]"#;
    let catalog = Catalog::from_json(json).unwrap();

    assert_eq!(catalog.len(), 2);
    assert!(catalog.topics()[0].validate().is_ok());
    assert_eq!(catalog.topics()[1].question, "");
    assert!(catalog.topics()[1].validate().is_err());
}

#[test]
fn test_from_json_rejects_malformed() {
    let err = Catalog::from_json("{not json").unwrap_err();
    assert!(matches!(err, PressError::UserError(_)));
}

#[test]
fn test_load_json_round_trips_builtin() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("topics.json");
    std::fs::write(&path, serde_json::to_string_pretty(&list_topics()).unwrap()).unwrap();

    let catalog = Catalog::load_json(&path).unwrap();
    assert_eq!(catalog.topics(), list_topics().as_slice());
}

#[test]
fn test_load_json_missing_file() {
    let temp = TempDir::new().unwrap();
    let err = Catalog::load_json(temp.path().join("nope.json")).unwrap_err();
    assert!(err.to_string().contains("failed to read topics file"));
}
