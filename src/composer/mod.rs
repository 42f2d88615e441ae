//! Document composition pipeline.
//!
//! [`compose`] turns one [`TopicRecord`] into a finished [`Document`] by
//! running nine pure stages in a fixed order:
//!
//! 1. define angle
//! 2. gather research
//! 3. synthesize
//! 4. structure
//! 5. validate
//! 6. develop scenario
//! 7. analyze coherence
//! 8. refine prose
//! 9. final format
//!
//! Stages 4 through 7 pass an explicit [`ArgumentStructure`] along; the
//! scenario and skeptic sections start as sentinels and must be filled before
//! stage 7 flattens the structure.
//!
//! Composition holds no state and performs no I/O, so different topics can be
//! composed from different threads without coordination.

pub mod stages;
mod structure;
mod template;


pub use structure::{
    ArgumentStructure, PLACEHOLDERS, SCENARIO_PLACEHOLDER, SKEPTIC_PLACEHOLDER, Section,
};
pub use template::TemplateError;

use crate::catalog::TopicRecord;
use crate::config::BaseArticle;
use crate::error::Result;
use std::fmt;

/// Stage names in execution order.
pub const STAGES: [&str; 9] = [
    "define_angle",
    "gather_research",
    "synthesize",
    "structure",
    "validate",
    "develop_scenario",
    "analyze_coherence",
    "refine_prose",
    "final_format",
];

/// Default series length, the `N` in `Part {id}/{N}`.
pub const DEFAULT_SERIES_LENGTH: usize = 10;

/// Read-only inputs shared by every composition in a run.
#[derive(Debug, Clone)]
pub struct ComposerSettings {
    /// Total number of parts in the series.
    pub series_length: usize,
    /// Article cited under each subtitle.
    pub base_article: BaseArticle,
}

impl Default for ComposerSettings {
    fn default() -> Self {
        Self {
            series_length: DEFAULT_SERIES_LENGTH,
            base_article: BaseArticle::default(),
        }
    }
}

/// A finished opinion piece in Markdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    text: String,
}

impl Document {
    pub(crate) fn new(text: String) -> Self {
        Self { text }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whitespace-separated word count.
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Compose the opinion piece for `topic`.
///
/// # Errors
///
/// * `PressError::DataValidation` - the topic is missing a required field
/// * `PressError::Template` - a stage template failed to render
pub fn compose(topic: &TopicRecord, settings: &ComposerSettings) -> Result<Document> {
    topic.validate()?;

    let _span = tracing::debug_span!("compose", topic = topic.id).entered();

    let angle = stages::define_angle(topic)?;
    tracing::trace!(stage = STAGES[0], len = angle.len());

    let research = stages::gather_research();
    tracing::trace!(stage = STAGES[1], points = research.len());

    let introduction = stages::synthesize(topic, &angle, research)?;
    tracing::trace!(stage = STAGES[2], len = introduction.len());

    let argument = stages::structure(topic, introduction)?;
    tracing::trace!(stage = STAGES[3], unfilled = argument.unfilled().len());

    let argument = stages::validate_claims(argument)?;
    tracing::trace!(stage = STAGES[4], unfilled = argument.unfilled().len());

    let argument = stages::develop_scenario(topic, argument)?;
    tracing::trace!(stage = STAGES[5], unfilled = argument.unfilled().len());

    let coherent = stages::analyze_coherence(argument)?;
    tracing::trace!(stage = STAGES[6], len = coherent.len());

    let polished = stages::refine_prose(coherent);
    tracing::trace!(stage = STAGES[7], len = polished.len());

    let document = stages::final_format(topic, &polished, settings)?;
    tracing::debug!(stage = STAGES[8], words = document.word_count(), "composed");

    Ok(document)
}
