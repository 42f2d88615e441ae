//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for a content run.
///
/// This struct represents the contents of an optional `pingpong.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory all output files are written into.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Maximum characters of the sanitized title kept in a piece filename.
    #[serde(default = "default_filename_title_limit")]
    pub filename_title_limit: usize,

    /// Article cited at the top of every piece.
    #[serde(default)]
    pub base_article: BaseArticle,

    /// Voice descriptors recorded in `metadata.json`.
    #[serde(default)]
    pub expert_voice: ExpertVoice,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            filename_title_limit: default_filename_title_limit(),
            base_article: BaseArticle::default(),
            expert_voice: ExpertVoice::default(),
        }
    }
}
