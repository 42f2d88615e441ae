//! Writing a run to disk.
//!
//! Layout of the output directory:
//!
//! ```text
//! {output_dir}/
//! ├── metadata.json
//! ├── topics.json
//! ├── opinion_piece_01_{title}.md
//! ├── ...
//! └── summary.md
//! ```

mod naming;
mod summary;


pub use naming::{piece_filename, sanitize_title};
pub use summary::render_summary;

use crate::error::{PressError, Result};
use crate::fs::{atomic_write_file, ensure_dir};
use crate::run::ContentBundle;
use serde::Serialize;
use std::path::{Path, PathBuf};

pub const METADATA_FILE: &str = "metadata.json";
pub const TOPICS_FILE: &str = "topics.json";
pub const SUMMARY_FILE: &str = "summary.md";

/// Paths written by [`save_content`].
#[derive(Debug, Clone)]
pub struct SavedContent {
    pub output_dir: PathBuf,
    pub metadata: PathBuf,
    pub topics: PathBuf,
    /// Piece files in ascending topic id order.
    pub pieces: Vec<PathBuf>,
    pub summary: PathBuf,
}

impl SavedContent {
    pub fn file_count(&self) -> usize {
        self.pieces.len() + 3
    }
}

/// Write metadata, topics, every piece and the summary into `output_dir`.
///
/// The directory is created if missing. Existing files with the same names
/// are replaced.
///
/// # Errors
///
/// * `PressError::Io` - the directory or any file could not be written
/// * `PressError::Serialization` - JSON encoding failed
pub fn save_content(
    bundle: &ContentBundle,
    output_dir: &Path,
    filename_title_limit: usize,
) -> Result<SavedContent> {
    ensure_dir(output_dir)?;

    let metadata = output_dir.join(METADATA_FILE);
    atomic_write_file(&metadata, &to_json(&bundle.metadata)?)?;
    tracing::debug!(path = %metadata.display(), "wrote metadata");

    let topics = output_dir.join(TOPICS_FILE);
    atomic_write_file(&topics, &to_json(&bundle.topics)?)?;
    tracing::debug!(path = %topics.display(), "wrote topics");

    let mut pieces = Vec::with_capacity(bundle.pieces.len());
    for piece in &bundle.pieces {
        let path = output_dir.join(piece_filename(&piece.topic, filename_title_limit));
        atomic_write_file(&path, piece.content.as_str())?;
        tracing::debug!(topic = piece.topic.id, path = %path.display(), "wrote piece");
        pieces.push(path);
    }

    let summary = output_dir.join(SUMMARY_FILE);
    atomic_write_file(&summary, &render_summary(bundle))?;

    tracing::info!(
        dir = %output_dir.display(),
        pieces = pieces.len(),
        "content saved"
    );

    Ok(SavedContent {
        output_dir: output_dir.to_path_buf(),
        metadata,
        topics,
        pieces,
        summary,
    })
}

/// Pretty JSON with two-space indentation and a trailing newline.
fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(value)
        .map_err(|e| PressError::Serialization(format!("failed to encode JSON: {}", e)))?;
    json.push('\n');
    Ok(json)
}
