//! EditorConfig Lint CLI
//!
//! A command-line tool for checking and fixing files against their
//! `.editorconfig` declarations.

use clap::Parser;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode as StdExitCode;
use tracing::{Level, debug, error, info};
use tracing_subscriber::EnvFilter;

mod cli;

use cli::Args;
use cli::config::{ExitCode, ValidatedConfig};
use cli::output::RunResults;
use editorconfig_lint_core::engine::{Engine, list_files};

fn main() -> StdExitCode {
    let args = Args::parse();

    init_tracing(args.verbose, args.json);

    StdExitCode::from(u8::from(run(args)))
}

/// Initialize tracing based on verbosity level.
fn init_tracing(verbosity: u8, json_output: bool) {
    // Don't output logs when using JSON output mode
    if json_output {
        return;
    }

    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::from_default_env()
        .add_directive(level.into())
        .add_directive("ignore=warn".parse().unwrap())
        .add_directive("globset=warn".parse().unwrap());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

/// Run the linter with the given arguments.
fn run(args: Args) -> ExitCode {
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();

    let config = match ValidatedConfig::from_args(&args) {
        Ok(config) => config,
        Err(e) => {
            let use_colors = !args.json && io::stderr().is_terminal();
            let mut output = cli::output::HumanOutput::new(&mut stderr, use_colors);
            let _ = output.write_error(&e.to_string());
            return ExitCode::StartupFailure;
        }
    };

    let use_colors = !config.json_output && io::stdout().is_terminal();

    debug!("Validated configuration: {:?}", config);
    info!("Search root: {}", config.root.display());

    let files = collect_targets(&config);
    info!("Checking {} file(s)", files.len());

    let engine = Engine::new(&config.root);
    let mut results = RunResults::new();

    if config.fix {
        let (reports, failures) = engine.fix_files(&files);
        for report in reports {
            if report.changed {
                results.add_fixed(report.path.clone());
            }
            results.add_report(report.path, report.unfixable);
        }
        for failure in failures {
            results.add_failure(failure.path, failure.error.to_string());
        }
    } else {
        let (reports, failures) = engine.check_files(&files);
        for report in reports {
            results.add_report(report.path, report.violations);
        }
        for failure in failures {
            results.add_failure(failure.path, failure.error.to_string());
        }
    }

    if config.json_output {
        if let Err(e) = results.write_json(&mut stdout) {
            error!("Failed to write JSON output: {}", e);
            return ExitCode::StartupFailure;
        }
    } else if let Err(e) = results.write_human(&mut stdout, use_colors) {
        error!("Failed to write output: {}", e);
        return ExitCode::StartupFailure;
    }

    config.exit_code_for_results(results.has_errors(), results.has_warnings())
}

/// Expands the configured targets into a deduplicated list of files,
/// applying the exclude patterns.
fn collect_targets(config: &ValidatedConfig) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for target in &config.targets {
        files.extend(list_files(target, &config.walker));
    }
    files.sort();
    files.dedup();
    files.retain(|path| !config.is_excluded(path));
    files
}
