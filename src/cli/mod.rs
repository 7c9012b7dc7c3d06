//! Command-line interface module

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{ReplaceError, ReplaceResult};
use crate::replace::batch::RunOptions;
use crate::replace::config::{ReplaceConfig, ReplacePair};

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "jsonsubst")]
#[command(about = "Replace literal text across every JSON file under a directory")]
#[command(version = "0.1.0")]
#[command(long_about = None)]
pub struct Args {
    /// Root directory to scan for JSON files
    pub root: PathBuf,

    /// Literal text to search for (exact match, not a pattern)
    pub old: String,

    /// Replacement text (empty deletes all occurrences)
    pub new: String,

    /// Follow symbolic links during traversal
    #[arg(long)]
    pub follow_links: bool,

    /// Maximum file size to load (e.g., 100MB, default: 100MB)
    #[arg(long)]
    pub memory_limit: Option<String>,

    /// Show a progress bar while processing
    #[arg(long)]
    pub progress: bool,

    /// Output run statistics
    #[arg(long)]
    pub stats: bool,

    /// Write the run summary as JSON to a file
    #[arg(long)]
    pub summary_json: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(long)]
    pub quiet: bool,
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub args: Args,
    pub pair: ReplacePair,
    pub replace_config: ReplaceConfig,
}

impl CliConfig {
    /// Create CLI configuration from arguments
    pub fn from_args(args: Args) -> ReplaceResult<Self> {
        let pair =
            ReplacePair::new(&args.old, &args.new).map_err(ReplaceError::configuration)?;

        let memory_limit = parse_memory_limit(&args.memory_limit)?;
        let replace_config = ReplaceConfig {
            memory_limit,
            follow_links: args.follow_links,
        };
        replace_config
            .validate()
            .map_err(ReplaceError::configuration)?;

        Ok(Self {
            args,
            pair,
            replace_config,
        })
    }

    /// Console options for the run
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            quiet: self.args.quiet,
            verbose: self.args.verbose,
            progress: self.args.progress,
        }
    }

    /// Check if quiet mode is enabled
    pub fn is_quiet(&self) -> bool {
        self.args.quiet
    }

    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.args.verbose
    }

    /// Check if stats output is requested
    pub fn want_stats(&self) -> bool {
        self.args.stats
    }
}

/// Parse memory limit string (e.g., "100MB", "1GB", "500KB")
fn parse_memory_limit(limit: &Option<String>) -> ReplaceResult<usize> {
    let Some(limit_str) = limit else {
        return Ok(100 * 1024 * 1024); // 100MB default
    };

    let limit_str = limit_str.trim().to_uppercase();
    let invalid =
        || ReplaceError::configuration(format!("Invalid memory limit: {}", limit_str));

    if let Some(size) = limit_str.strip_suffix("MB") {
        let mb = size.parse::<f64>().map_err(|_| invalid())?;
        Ok((mb * 1024.0 * 1024.0) as usize)
    } else if let Some(size) = limit_str.strip_suffix("KB") {
        let kb = size.parse::<f64>().map_err(|_| invalid())?;
        Ok((kb * 1024.0) as usize)
    } else if let Some(size) = limit_str.strip_suffix("GB") {
        let gb = size.parse::<f64>().map_err(|_| invalid())?;
        Ok((gb * 1024.0 * 1024.0 * 1024.0) as usize)
    } else if let Some(size) = limit_str.strip_suffix('B') {
        size.parse::<usize>().map_err(|_| invalid())
    } else {
        // Assume bytes
        limit_str.parse::<usize>().map_err(|_| invalid())
    }
}

/// CLI utilities and helpers
pub struct CliUtils;

impl CliUtils {
    /// Format a file size in human-readable format
    pub fn format_file_size(bytes: u64) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
        let mut size = bytes as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", bytes, UNITS[unit_index])
        } else {
            format!("{:.1} {}", size, UNITS[unit_index])
        }
    }

    /// Format a duration in human-readable format
    pub fn format_duration(duration: Duration) -> String {
        let total_millis = duration.as_millis();

        if total_millis < 1000 {
            format!("{}ms", total_millis)
        } else if total_millis < 60_000 {
            format!("{:.1}s", total_millis as f64 / 1000.0)
        } else {
            let minutes = total_millis / 60_000;
            let seconds = (total_millis % 60_000) / 1000;
            format!("{}m {}s", minutes, seconds)
        }
    }

    /// Create a progress bar for file processing
    pub fn create_progress_bar(total: u64) -> indicatif::ProgressBar {
        let pb = indicatif::ProgressBar::new(total);
        pb.set_style(
            indicatif::ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("#>-"),
        );
        pb
    }

    /// Show a success message (if not in quiet mode)
    pub fn show_success(message: &str, quiet: bool) {
        if !quiet {
            println!("✓ {}", message);
        }
    }

    /// Show an error message
    pub fn show_error(message: &str) {
        eprintln!("✗ {}", message);
    }

    /// Show a warning message (if not in quiet mode)
    pub fn show_warning(message: &str, quiet: bool) {
        if !quiet {
            eprintln!("⚠ {}", message);
        }
    }

    /// Check if output should be colored
    pub fn should_use_color() -> bool {
        atty::is(atty::Stream::Stdout) && std::env::var("NO_COLOR").is_err()
    }
}

/// Handle CLI errors with user-friendly messages
pub fn handle_error(error: &ReplaceError) {
    let message = error.user_message();
    CliUtils::show_error(&message);

    // Provide helpful suggestions
    if message.contains("File too large") {
        eprintln!("\nTip: Use --memory-limit to raise the per-file size allowance");
    } else if message.contains("not a traversable directory") {
        eprintln!("\nTip: The root must be an existing, readable directory");
    } else if message.contains("Search text must not be empty") {
        eprintln!("\nTip: Provide a non-empty string to search for");
    }

    // Show usage hint
    eprintln!("\nTry 'jsonsubst --help' for usage information.");
}
