//! Topic catalog.
//!
//! A catalog is an ordered, immutable sequence of [`TopicRecord`]s whose ids
//! run contiguously from 1 and match their position. Callers rely on that
//! ordering for filenames, the `Part {id}/{N}` heading, and the summary.
//!
//! The built-in series is returned by [`list_topics`]. An external catalog
//! can be read from a JSON file in the same shape `topics.json` is written
//! in; fields missing from such a file deserialize as empty strings and are
//! reported per topic by [`TopicRecord::validate`].

mod topics;

#[cfg(test)]
mod tests;

use crate::composer::PLACEHOLDERS;
use crate::error::{PressError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One unit of input: a domain, a question and a thesis to argue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicRecord {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub thesis: String,
}

impl TopicRecord {
    /// Check that every required field is present and free of section
    /// sentinels.
    ///
    /// Returns `PressError::DataValidation` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if self.id == 0 {
            return Err(PressError::DataValidation(format!(
                "topic '{}' has no id (ids start at 1)",
                self.title
            )));
        }

        let required = [
            ("title", &self.title),
            ("domain", &self.domain),
            ("question", &self.question),
            ("thesis", &self.thesis),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(PressError::DataValidation(format!(
                    "topic {} is missing required field '{}'",
                    self.id, field
                )));
            }
            if let Some(sentinel) = PLACEHOLDERS.into_iter().find(|p| value.contains(*p)) {
                return Err(PressError::DataValidation(format!(
                    "topic {} field '{}' contains reserved token {}",
                    self.id, field, sentinel
                )));
            }
        }

        Ok(())
    }
}

/// Return the built-in topic series in id order.
///
/// Every call returns the same sequence.
pub fn list_topics() -> Vec<TopicRecord> {
    topics::builtin_topics()
}

/// An ordered topic list with contiguous ids `1..=N`.
#[derive(Debug, Clone)]
pub struct Catalog {
    topics: Vec<TopicRecord>,
}

impl Catalog {
    /// The built-in ten-part series.
    pub fn builtin() -> Self {
        Self {
            topics: list_topics(),
        }
    }

    /// Build a catalog from records, requiring ids to equal position + 1.
    ///
    /// Field completeness is not checked here; incomplete topics are
    /// rejected individually at composition time.
    pub fn from_records(topics: Vec<TopicRecord>) -> Result<Self> {
        if topics.is_empty() {
            return Err(PressError::UserError(
                "topic catalog is empty".to_string(),
            ));
        }

        for (position, topic) in topics.iter().enumerate() {
            let expected = position as u32 + 1;
            if topic.id != expected {
                return Err(PressError::UserError(format!(
                    "topic ids must run 1..={} in order: found id {} at position {} (expected {})",
                    topics.len(),
                    topic.id,
                    position + 1,
                    expected
                )));
            }
        }

        Ok(Self { topics })
    }

    /// Load a catalog from a JSON array of topic objects.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            PressError::UserError(format!(
                "failed to read topics file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_json(&content)
    }

    /// Parse a catalog from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let topics: Vec<TopicRecord> = serde_json::from_str(json)
            .map_err(|e| PressError::UserError(format!("failed to parse topics JSON: {}", e)))?;

        Self::from_records(topics)
    }

    pub fn topics(&self) -> &[TopicRecord] {
        &self.topics
    }

    /// Number of topics, the `N` in `Part {id}/{N}`.
    pub fn len(&self) -> usize {
        self.topics.len()
    }
}
