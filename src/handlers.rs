//! CLI command handlers, separated from main.rs to enable unit testing.

use crate::cli::{Cli, FailLevel, OutputFormat};
use crate::decision::Policy;
use crate::error::ScanError;
use crate::reporter::{json::JsonReporter, terminal::TerminalReporter, Reporter};
use crate::rules::Statistics;
use crate::run::{ScanOutcome, ScanRunner};
use std::fs;
use std::process::ExitCode;

/// Decide the process exit status from the scan statistics and the
/// requested fail level. Critical findings always fail the build; the
/// high-count threshold only applies when the fail level is `high` or
/// below.
pub fn should_fail_build(statistics: &Statistics, fail_on: FailLevel, policy: &Policy) -> bool {
    let critical_in_range = statistics.critical >= policy.critical_threshold;
    let high_in_range =
        fail_on >= FailLevel::High && statistics.high >= policy.high_threshold;
    critical_in_range || high_in_range
}

pub fn run_scan(cli: &Cli) -> ExitCode {
    let runner = ScanRunner::new();

    let outcome = match runner.scan(&cli.path) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    for warning in &outcome.warnings {
        eprintln!("Warning: skipped {}: {}", warning.path, warning.reason);
    }

    match cli.format {
        OutputFormat::Terminal => {
            print!("{}", TerminalReporter::new(cli.verbose).report(&outcome.report));
        }
        OutputFormat::Json => {
            println!("{}", JsonReporter::new().report(&outcome.report));
        }
    }

    if let Some(ref output_path) = cli.output {
        if let Err(e) = save_report(&outcome, output_path) {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
        eprintln!("Report saved to {}", output_path.display());
    }

    build_exit_code(&outcome, cli.fail_on)
}

/// Serialize the report shape verbatim and write it to `path`.
fn save_report(outcome: &ScanOutcome, path: &std::path::Path) -> crate::error::Result<()> {
    let json = serde_json::to_string_pretty(&outcome.report).map_err(ScanError::JsonError)?;
    fs::write(path, json).map_err(|e| ScanError::WriteError {
        path: path.display().to_string(),
        source: e,
    })
}

fn build_exit_code(outcome: &ScanOutcome, fail_on: FailLevel) -> ExitCode {
    if should_fail_build(&outcome.report.statistics, fail_on, &Policy::default()) {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}
