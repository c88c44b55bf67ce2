//! Shared test utilities for pdfwords integration tests.
//!
//! This module provides:
//! - `TestHarness` for isolated runs over a temporary document tree
//! - `TextLayerStub`, a `DocumentProcessor` that stands in for the OCR engine

pub mod harness;

pub use harness::{TestHarness, TextLayerStub, FAILURE_MARKER};
