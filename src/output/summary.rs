//! Markdown summary of a run.

use crate::run::ContentBundle;
use std::fmt::Write;

/// Render `summary.md`: a header, the counts, and one block per topic in
/// ascending id order.
pub fn render_summary(bundle: &ContentBundle) -> String {
    let mut out = String::new();

    out.push_str("# AI Ping-Pong Expert Content Summary\n\n");
    let _ = writeln!(
        out,
        "Generated {} topics and {} opinion pieces\n",
        bundle.topics.len(),
        bundle.pieces.len()
    );
    out.push_str("## Topics Generated:\n\n");

    let mut topics: Vec<_> = bundle.topics.iter().collect();
    topics.sort_by_key(|t| t.id);

    for topic in topics {
        let _ = writeln!(out, "{}. **{}**", topic.id, topic.title);
        let _ = writeln!(out, "   - Domain: {}", topic.domain);
        let _ = writeln!(out, "   - Central Question: {}", topic.question);
        let _ = writeln!(out, "   - Core Thesis: {}\n", topic.thesis);
    }

    out
}
