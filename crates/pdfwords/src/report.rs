//! Human- and machine-readable renderings of a finished run.

use std::fmt::Write;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::pipeline::{Diagnostic, RunOutcome};
use crate::stats::{CorpusStats, RankedEntry};

/// The first `limit` entries, or all of them.
pub fn limit_entries(entries: &[RankedEntry], limit: Option<usize>) -> &[RankedEntry] {
    match limit {
        Some(n) if n < entries.len() => &entries[..n],
        _ => entries,
    }
}

/// Plain-text report: totals, then one `word count docs` line per entry.
pub fn render_text(stats: &CorpusStats, entries: &[RankedEntry]) -> String {
    // Writing into a String cannot fail
    let mut output = String::new();
    let _ = writeln!(output, "Total files: {}", stats.total_files_seen);
    let _ = writeln!(output, "Total directories: {}", stats.total_directories_seen);
    output.push_str("\nList of words (sorted):\n");

    for entry in entries {
        let _ = writeln!(output, "{}", format_entry(entry));
    }

    output
}

pub fn format_entry(entry: &RankedEntry) -> String {
    format!(
        "{:<10} {:>6}   {:>4}",
        entry.word, entry.total_count, entry.doc_count
    )
}

#[derive(Serialize)]
struct JsonReport<'a> {
    generated_at: DateTime<Utc>,
    input_directory: &'a Path,
    #[serde(flatten)]
    stats: &'a CorpusStats,
    distinct_words: usize,
    diagnostics: &'a [Diagnostic],
    words: &'a [RankedEntry],
}

pub fn render_json(
    input_directory: &Path,
    outcome: &RunOutcome,
    entries: &[RankedEntry],
) -> Result<String, serde_json::Error> {
    render_json_at(Utc::now(), input_directory, outcome, entries)
}

fn render_json_at(
    generated_at: DateTime<Utc>,
    input_directory: &Path,
    outcome: &RunOutcome,
    entries: &[RankedEntry],
) -> Result<String, serde_json::Error> {
    let report = JsonReport {
        generated_at,
        input_directory,
        stats: &outcome.stats,
        distinct_words: outcome.stats.distinct_words(),
        diagnostics: &outcome.diagnostics,
        words: entries,
    };
    serde_json::to_string_pretty(&report)
}
