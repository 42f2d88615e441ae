//! Console reporting for a generation run.
//!
//! Output is for humans only; nothing parses it.

use crate::config::ExpertVoice;
use crate::output::SavedContent;
use crate::run::ContentBundle;
use std::fmt::Write;

/// Lines printed before composition starts.
pub fn render_banner(topic_count: usize) -> String {
    format!(
        "Generating AI Ping-Pong expert content...\n\
         Composing {} topics through the 9-stage pipeline\n",
        topic_count
    )
}

/// The end-of-run summary.
pub fn render_run_report(bundle: &ContentBundle, saved: &SavedContent, voice: &ExpertVoice) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Generated {} topics", bundle.topics.len());
    let _ = writeln!(out, "Generated {} opinion pieces", bundle.pieces.len());

    if !bundle.metadata.skipped_topics.is_empty() {
        let _ = writeln!(
            out,
            "Skipped {} topics:",
            bundle.metadata.skipped_topics.len()
        );
        for skipped in &bundle.metadata.skipped_topics {
            let _ = writeln!(out, "  - topic {}: {}", skipped.id, skipped.reason);
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "All content saved to: {}/ ({} files)",
        saved.output_dir.display(),
        saved.file_count()
    );
    let _ = writeln!(
        out,
        "Total word count: {} words",
        with_thousands(bundle.total_words())
    );
    let _ = writeln!(out, "Average piece length: {} words", bundle.average_words());

    let _ = writeln!(out);
    let _ = writeln!(out, "Expert positioning ({}):", voice.credentials);
    let _ = writeln!(out, "  - Tone: {}", voice.tone);
    let _ = writeln!(out, "  - Style: {}", voice.style);
    let _ = writeln!(out, "  - Perspective: {}", voice.perspective);
    out.push_str("  - Consistent authoritative voice across all pieces\n");
    out.push_str("  - Data-driven arguments with strong evidence\n");
    out.push_str("  - Contrarian perspectives that challenge industry norms\n");
    out.push_str("  - Direct citations to the original AI Ping-Pong research\n");
    out.push_str("  - Focus on practical business impact and ROI\n");

    out
}

/// Format `n` with comma thousands separators.
fn with_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}
