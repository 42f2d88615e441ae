//! Filename derivation for opinion pieces.

use crate::catalog::TopicRecord;

/// Characters dropped from titles before they become filenames.
const STRIPPED_CHARS: [char; 4] = [':', '?', '/', '\\'];

/// Turn a title into a filename stem.
///
/// Spaces become underscores; `:`, `?`, `/` and `\` are removed; the result is
/// truncated to `limit` characters (not bytes).
pub fn sanitize_title(title: &str, limit: usize) -> String {
    title
        .chars()
        .filter(|c| !STRIPPED_CHARS.contains(c))
        .map(|c| if c == ' ' { '_' } else { c })
        .take(limit)
        .collect()
}

/// Filename for a topic's piece.
///
/// Format: `opinion_piece_{id:02}_{sanitized_title}.md`
/// Example: `opinion_piece_04_Culinary_Anarchy_Inventing_Unthinkable_Food_with_a.md`
pub fn piece_filename(topic: &TopicRecord, limit: usize) -> String {
    format!(
        "opinion_piece_{:02}_{}.md",
        topic.id,
        sanitize_title(&topic.title, limit)
    )
}
