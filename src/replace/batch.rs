//! Directory-level replacement driver

use std::path::Path;
use std::time::Instant;

use console::style;
use indicatif::ProgressBar;

use crate::cli::CliUtils;
use crate::error::{ReplaceError, ReplaceErrorKind, ReplaceResult};
use crate::replace::config::{ReplaceConfig, ReplacePair};
use crate::replace::engine::{self, FileOutcome};
use crate::replace::stats::RunSummary;
use crate::walker;

/// Console behavior for a run
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Suppress non-error output
    pub quiet: bool,
    /// Report unchanged files and occurrence counts
    pub verbose: bool,
    /// Show a progress bar while processing
    pub progress: bool,
}

/// Walk the tree under `root` and apply the replacement pair to every JSON
/// file found. Per-file failures are reported and counted, never escalated;
/// traversal-level failures abort the run.
pub fn replace_tree(
    root: &Path,
    pair: &ReplacePair,
    config: &ReplaceConfig,
    opts: &RunOptions,
) -> ReplaceResult<RunSummary> {
    if !root.is_dir() {
        return Err(ReplaceError::replace(ReplaceErrorKind::InvalidRoot {
            path: root.to_path_buf(),
        }));
    }

    let started = Instant::now();
    let json_files = walker::find_json_files(root, config.follow_links)
        .map_err(|e| ReplaceError::io(e, root))?;

    let mut summary = RunSummary::new();

    if json_files.is_empty() {
        if !opts.quiet {
            println!("No JSON files found in {}", root.display());
        }
        summary.finish(started.elapsed());
        return Ok(summary);
    }

    if !opts.quiet {
        println!("Found {} JSON files", json_files.len());
    }

    let bar = if opts.progress && !opts.quiet {
        Some(CliUtils::create_progress_bar(json_files.len() as u64))
    } else {
        None
    };

    for json_file in &json_files {
        match engine::process_file(json_file, pair, config) {
            Ok(report) => {
                match report.outcome {
                    FileOutcome::Replaced { occurrences } => {
                        let line = if opts.verbose {
                            format!(
                                "{} replaced: {} ({} occurrences)",
                                style("✓").green(),
                                json_file.display(),
                                occurrences
                            )
                        } else {
                            format!("{} replaced: {}", style("✓").green(), json_file.display())
                        };
                        emit(bar.as_ref(), opts.quiet, &line);
                    }
                    FileOutcome::Unchanged => {
                        if opts.verbose {
                            emit(
                                bar.as_ref(),
                                opts.quiet,
                                &format!("  unchanged: {}", json_file.display()),
                            );
                        }
                    }
                }
                summary.record(&report);
            }
            Err(e) => {
                // Skipped, not fatal; keep going with the next file
                eprintln!(
                    "{} {}: {}",
                    style("✗").red(),
                    json_file.display(),
                    e.user_message()
                );
                summary.record_failure();
            }
        }

        if let Some(bar) = &bar {
            bar.inc(1);
        }
    }

    if let Some(bar) = &bar {
        bar.finish_and_clear();
    }

    summary.finish(started.elapsed());
    Ok(summary)
}

fn emit(bar: Option<&ProgressBar>, quiet: bool, line: &str) {
    if quiet {
        return;
    }
    match bar {
        Some(bar) => bar.println(line),
        None => println!("{}", line),
    }
}
