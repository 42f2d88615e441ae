//! Configuration value types and their defaults.
//!
//! These describe the source article the series cites and the voice the
//! pieces are written in. They are read-only for the lifetime of a run.

use serde::{Deserialize, Serialize};

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "ai_ping_pong_expert_content";

/// Default maximum length, in characters, of the title part of a filename.
pub const DEFAULT_FILENAME_TITLE_LIMIT: usize = 50;

/// The article every piece cites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseArticle {
    pub title: String,
    pub author: String,
    pub url: String,
}

impl Default for BaseArticle {
    fn default() -> Self {
        Self {
            title: "AI Ping-Pong: Manual Multi-Model Workflow for 98% Content Quality".to_string(),
            author: "Stanislav Huseletov".to_string(),
            url: "https://trilogyai.substack.com/p/ai-ping-pong".to_string(),
        }
    }
}

/// Descriptors of the authorial voice, recorded in run metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpertVoice {
    pub tone: String,
    pub style: String,
    pub perspective: String,
    pub credentials: String,
}

impl Default for ExpertVoice {
    fn default() -> Self {
        Self {
            tone: "Authoritative, data-driven, contrarian".to_string(),
            style: "Spiky opinions with strong evidence".to_string(),
            perspective: "Industry insider challenging conventional wisdom".to_string(),
            credentials: "AI workflow optimization expert".to_string(),
        }
    }
}

pub(super) fn default_output_dir() -> String {
    DEFAULT_OUTPUT_DIR.to_string()
}

pub(super) fn default_filename_title_limit() -> usize {
    DEFAULT_FILENAME_TITLE_LIMIT
}
