use std::collections::{HashMap, HashSet};

use serde::Serialize;

/// Running statistics for one distinct word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordStat {
    pub word: String,
    /// Occurrences across all documents.
    pub total_count: u64,
    /// Number of distinct documents the word appeared in.
    pub doc_count: u64,
}

impl WordStat {
    fn new(word: &str) -> Self {
        Self {
            word: word.to_string(),
            total_count: 0,
            doc_count: 0,
        }
    }
}

/// Aggregate record for one run over a corpus.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CorpusStats {
    /// Every file visited, whatever its type.
    pub total_files_seen: u64,
    /// Every subdirectory visited below the root.
    pub total_directories_seen: u64,
    /// Matching documents whose text was extracted.
    pub documents_processed: u64,
    /// Matching documents whose extraction failed.
    pub documents_failed: u64,
    #[serde(skip)]
    pub words: HashMap<String, WordStat>,
}

impl CorpusStats {
    pub fn word(&self, word: &str) -> Option<&WordStat> {
        self.words.get(word)
    }

    pub fn distinct_words(&self) -> usize {
        self.words.len()
    }
}

/// Accumulates word statistics document by document.
///
/// Counts only ever grow. Per-document presence lives in a [`DocumentScope`]
/// which borrows the aggregator mutably, so two documents can never be open at
/// the same time.
#[derive(Debug, Default)]
pub struct Aggregator {
    stats: CorpusStats,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the presence scope for one document. The document is counted as
    /// processed only once [`DocumentScope::end_document`] is called.
    pub fn begin_document(&mut self) -> DocumentScope<'_> {
        DocumentScope {
            stats: &mut self.stats,
            seen: HashSet::new(),
        }
    }

    /// Records a whole document's tokens in one scope.
    pub fn record_document<I, S>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut scope = self.begin_document();
        for token in tokens {
            scope.record_word(token.as_ref());
        }
        scope.end_document();
    }

    pub fn record_file(&mut self) {
        self.stats.total_files_seen += 1;
    }

    pub fn record_directory(&mut self) {
        self.stats.total_directories_seen += 1;
    }

    pub fn record_failure(&mut self) {
        self.stats.documents_failed += 1;
    }

    pub fn stats(&self) -> &CorpusStats {
        &self.stats
    }

    pub fn into_stats(self) -> CorpusStats {
        self.stats
    }
}

/// Word presence tracking for the document currently being recorded.
#[derive(Debug)]
pub struct DocumentScope<'a> {
    stats: &'a mut CorpusStats,
    seen: HashSet<String>,
}

impl DocumentScope<'_> {
    pub fn record_word(&mut self, word: &str) {
        let entry = self
            .stats
            .words
            .entry(word.to_string())
            .or_insert_with(|| WordStat::new(word));
        entry.total_count += 1;

        if !self.seen.contains(word) {
            self.seen.insert(word.to_string());
            entry.doc_count += 1;
        }
    }

    /// Number of distinct words credited to this document so far.
    pub fn distinct_words(&self) -> usize {
        self.seen.len()
    }

    /// Closes the scope and counts the document as processed.
    pub fn end_document(self) {
        self.stats.documents_processed += 1;
    }
}
