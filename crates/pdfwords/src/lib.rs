//! Word-frequency statistics over a tree of scanned PDFs.
//!
//! The run is a single pass: [`scanner`] walks the tree, [`processor`] turns
//! each matching document into text, [`stats`] tokenizes and aggregates it,
//! and [`report`] renders the ranking.

pub mod config;
pub mod error;
pub mod pipeline;
pub mod processor;
pub mod report;
pub mod scanner;
pub mod stats;

pub use config::{load_config, resolve_config, Config, ExtractionMode, ReportFormat};
pub use error::{ConfigError, ProcessError, ScanError};
pub use pipeline::{Diagnostic, Pipeline, PipelineConfig, RunOutcome};
pub use stats::{rank, tokenize, Aggregator, CorpusStats, RankedEntry, WordStat};
