pub mod aggregator;
pub mod ranker;
pub mod tokenizer;

pub use aggregator::{Aggregator, CorpusStats, DocumentScope, WordStat};
pub use ranker::{rank, RankedEntry};
pub use tokenizer::{is_lowercase_word, tokenize};
