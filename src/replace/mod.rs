//! Literal text replacement module
//!
//! This module contains the replacement engine, run configuration,
//! directory-level driver, and run statistics.

pub mod batch;
pub mod config;
pub mod engine;
pub mod stats;

pub use batch::{replace_tree, RunOptions};
pub use config::{ReplaceConfig, ReplacePair};
pub use engine::{process_file, FileOutcome, FileReport};
pub use stats::RunSummary;
