use clap::Parser;
use std::time::Duration;

use jsonsubst::cli::{self, Args, CliConfig, CliUtils};
use jsonsubst::replace::batch;
use jsonsubst::{ReplaceError, ReplaceResult, RunSummary};

fn main() {
    let args = Args::parse();
    console::set_colors_enabled(CliUtils::should_use_color());

    if let Err(error) = run(args) {
        cli::handle_error(&error);
        std::process::exit(1);
    }
}

fn run(args: Args) -> ReplaceResult<()> {
    let config = CliConfig::from_args(args)?;

    if config.is_verbose() {
        eprintln!("Verbose mode enabled");
    }

    if !config.pair.is_stable() {
        CliUtils::show_warning(
            "replacement text contains the search text; rerunning will keep replacing",
            config.is_quiet(),
        );
    }

    let summary = batch::replace_tree(
        &config.args.root,
        &config.pair,
        &config.replace_config,
        &config.run_options(),
    )?;

    if !config.is_quiet() {
        println!("\n{}", summary.summary());
    }

    if config.want_stats() {
        output_statistics(&summary, config.is_quiet());
    }

    if let Some(path) = &config.args.summary_json {
        let json = summary
            .to_json()
            .map_err(|e| ReplaceError::other(anyhow::anyhow!("Failed to encode summary: {}", e)))?;
        std::fs::write(path, json).map_err(|e| ReplaceError::io(e, path))?;
        CliUtils::show_success(
            &format!("Summary written to {}", path.display()),
            config.is_quiet(),
        );
    }

    Ok(())
}

fn output_statistics(summary: &RunSummary, quiet: bool) {
    if quiet {
        return;
    }

    println!("\nRun Statistics:");
    println!("Files scanned: {}", summary.files_scanned);
    println!("Files replaced: {}", summary.files_replaced);
    println!("Files unchanged: {}", summary.files_unchanged);
    println!("Files failed: {}", summary.files_failed);
    println!("Occurrences replaced: {}", summary.occurrences_replaced);
    println!("Bytes read: {}", CliUtils::format_file_size(summary.bytes_read));
    println!(
        "Bytes written: {}",
        CliUtils::format_file_size(summary.bytes_written)
    );
    println!(
        "Processing time: {}",
        CliUtils::format_duration(Duration::from_millis(summary.processing_time_ms))
    );
}
