use std::cmp::Ordering;

use serde::Serialize;

use super::aggregator::{CorpusStats, WordStat};
use super::tokenizer::is_lowercase_word;

/// One row of the final ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedEntry {
    pub word: String,
    pub total_count: u64,
    pub doc_count: u64,
}

impl From<&WordStat> for RankedEntry {
    fn from(stat: &WordStat) -> Self {
        Self {
            word: stat.word.clone(),
            total_count: stat.total_count,
            doc_count: stat.doc_count,
        }
    }
}

/// Orders every observed word.
///
/// Keys, all ascending: words that are not lowercase (digits-only tokens)
/// before lowercase words, then document frequency, then total count, then
/// the word itself. Total count ascends here, matching the historical output
/// of this report even though it reads as a "most frequent first" column.
pub fn rank(stats: &CorpusStats) -> Vec<RankedEntry> {
    let mut entries: Vec<RankedEntry> = stats.words.values().map(RankedEntry::from).collect();
    entries.sort_by(compare);
    entries
}

/// The composite comparator used by [`rank`].
pub fn compare(a: &RankedEntry, b: &RankedEntry) -> Ordering {
    is_lowercase_word(&a.word)
        .cmp(&is_lowercase_word(&b.word))
        .then(a.doc_count.cmp(&b.doc_count))
        .then(a.total_count.cmp(&b.total_count))
        .then_with(|| a.word.cmp(&b.word))
}
