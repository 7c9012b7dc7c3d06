//! Bulk literal text replacement across JSON file trees
//!
//! Walks a directory, finds files whose name ends in `.json`, and rewrites
//! every literal occurrence of a search string in place. Contents are
//! treated as opaque UTF-8 text; nothing is parsed as JSON.

pub mod cli;
pub mod error;
pub mod replace;
pub mod walker;

// Re-export commonly used types
pub use error::{ReplaceError, ReplaceErrorKind, ReplaceResult};
pub use replace::batch::{replace_tree, RunOptions};
pub use replace::config::{ReplaceConfig, ReplacePair};
pub use replace::engine::{process_file, FileOutcome, FileReport};
pub use replace::stats::RunSummary;

use std::path::Path;

/// Replace text across a tree with default configuration.
///
/// Runs quietly; per-file failures are counted in the returned summary
/// rather than printed.
pub fn replace_in_tree(root: &Path, old: &str, new: &str) -> ReplaceResult<RunSummary> {
    let pair = ReplacePair::new(old, new).map_err(ReplaceError::configuration)?;
    replace_in_tree_with_config(root, &pair, &ReplaceConfig::default())
}

/// Replace text across a tree with custom configuration
pub fn replace_in_tree_with_config(
    root: &Path,
    pair: &ReplacePair,
    config: &ReplaceConfig,
) -> ReplaceResult<RunSummary> {
    let opts = RunOptions {
        quiet: true,
        ..Default::default()
    };
    replace::batch::replace_tree(root, pair, config, &opts)
}
