//! Per-file replacement engine
//!
//! Files are treated as opaque UTF-8 text, never parsed as JSON. A
//! substitution that crosses token boundaries can therefore produce
//! syntactically invalid JSON; that is the caller's bargain.

use std::fs;
use std::path::Path;

use crate::error::{ReplaceError, ReplaceErrorKind, ReplaceResult};
use crate::replace::config::{ReplaceConfig, ReplacePair};

/// What happened to a single file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// Content changed and was written back in place
    Replaced { occurrences: usize },
    /// No match (or no effective change); file left untouched
    Unchanged,
}

/// Outcome of processing one file, with the sizes involved
#[derive(Debug, Clone)]
pub struct FileReport {
    pub outcome: FileOutcome,
    pub input_size: u64,
    pub output_size: u64,
}

impl FileReport {
    pub fn was_replaced(&self) -> bool {
        matches!(self.outcome, FileOutcome::Replaced { .. })
    }
}

/// Replace all non-overlapping occurrences of the pair's search text,
/// scanning left to right; each replacement consumes the matched text.
/// Returns `None` when the content does not contain the search text.
pub fn replace_occurrences(content: &str, pair: &ReplacePair) -> Option<(String, usize)> {
    if !content.contains(pair.old()) {
        return None;
    }

    let occurrences = content.matches(pair.old()).count();
    Some((content.replace(pair.old(), pair.new_text()), occurrences))
}

/// Apply the replacement pair to one file, rewriting it in place when the
/// content changes. The write is skipped entirely when nothing changed, so
/// untouched files keep their modification metadata.
pub fn process_file(
    path: &Path,
    pair: &ReplacePair,
    config: &ReplaceConfig,
) -> ReplaceResult<FileReport> {
    // Check file size before reading to avoid exhausting memory
    if let Ok(metadata) = fs::metadata(path) {
        if metadata.len() > config.memory_limit as u64 {
            return Err(ReplaceError::replace(ReplaceErrorKind::FileTooLarge {
                size: metadata.len(),
                limit: config.memory_limit as u64,
                path: path.to_path_buf(),
            }));
        }
    }

    let content = fs::read_to_string(path).map_err(|e| ReplaceError::io(e, path))?;
    let input_size = content.len() as u64;

    match replace_occurrences(&content, pair) {
        Some((updated, occurrences)) if updated != content => {
            let output_size = updated.len() as u64;
            fs::write(path, updated).map_err(|e| ReplaceError::io(e, path))?;
            Ok(FileReport {
                outcome: FileOutcome::Replaced { occurrences },
                input_size,
                output_size,
            })
        }
        // Matched but identical after replacement (search == replacement)
        Some(_) | None => Ok(FileReport {
            outcome: FileOutcome::Unchanged,
            input_size,
            output_size: input_size,
        }),
    }
}
