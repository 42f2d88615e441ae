//! Batch generation over a catalog.
//!
//! [`generate_all_content`] composes every topic once, derives each piece's
//! word count from the composed document, and collects the result into a
//! [`ContentBundle`] ready for the output writer. A topic that fails data
//! validation is logged and recorded as skipped; the rest of the batch still
//! runs. Template and composition failures abort the batch.


use crate::catalog::{Catalog, TopicRecord};
use crate::composer::{ComposerSettings, Document, compose};
use crate::config::{Config, ExpertVoice};
use crate::error::{PressError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One composed piece and its bookkeeping.
#[derive(Debug, Clone)]
pub struct PieceRecord {
    pub topic: TopicRecord,
    pub content: Document,
    pub word_count: usize,
    pub generated_at: DateTime<Utc>,
}

/// A topic that could not be composed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedTopic {
    pub id: u32,
    pub reason: String,
}

/// Run-level metadata, written as `metadata.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunMetadata {
    pub total_topics: usize,
    pub total_pieces: usize,
    /// Title of the article the series cites.
    pub base_article: String,
    pub expert_voice: ExpertVoice,
    pub generated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped_topics: Vec<SkippedTopic>,
}

/// Everything a run produced.
#[derive(Debug, Clone)]
pub struct ContentBundle {
    pub metadata: RunMetadata,
    pub topics: Vec<TopicRecord>,
    /// Pieces in ascending topic id order.
    pub pieces: Vec<PieceRecord>,
}

impl ContentBundle {
    pub fn total_words(&self) -> usize {
        self.pieces.iter().map(|p| p.word_count).sum()
    }

    /// Integer mean words per piece; 0 when nothing was composed.
    pub fn average_words(&self) -> usize {
        self.total_words()
            .checked_div(self.pieces.len())
            .unwrap_or(0)
    }
}

/// Compose every topic in `catalog` using the settings in `config`.
///
/// # Errors
///
/// * `PressError::Template` - a stage template is broken
/// * `PressError::Composition` - a stage left the argument structure incomplete
///
/// Data-validation failures are not returned; they are recorded in
/// `metadata.skipped_topics`.
pub fn generate_all_content(catalog: &Catalog, config: &Config) -> Result<ContentBundle> {
    let settings = ComposerSettings {
        series_length: catalog.len(),
        base_article: config.base_article.clone(),
    };

    let mut pieces = Vec::with_capacity(catalog.len());
    let mut skipped = Vec::new();

    for topic in catalog.topics() {
        match compose(topic, &settings) {
            Ok(content) => {
                let word_count = content.word_count();
                tracing::info!(topic = topic.id, words = word_count, "composed opinion piece");
                pieces.push(PieceRecord {
                    topic: topic.clone(),
                    content,
                    word_count,
                    generated_at: Utc::now(),
                });
            }
            Err(PressError::DataValidation(reason)) => {
                tracing::warn!(topic = topic.id, %reason, "skipping topic");
                skipped.push(SkippedTopic {
                    id: topic.id,
                    reason,
                });
            }
            Err(err) => return Err(err),
        }
    }

    let metadata = RunMetadata {
        total_topics: catalog.len(),
        total_pieces: pieces.len(),
        base_article: config.base_article.title.clone(),
        expert_voice: config.expert_voice.clone(),
        generated_at: Utc::now(),
        skipped_topics: skipped,
    };

    Ok(ContentBundle {
        metadata,
        topics: catalog.topics().to_vec(),
        pieces,
    })
}
