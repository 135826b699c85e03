use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

/// Severity level at which the scan fails the build. Ordered from most
/// to least strict: `critical` only fails on critical findings, while
/// `high` and below also apply the high-count threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Default)]
pub enum FailLevel {
    #[default]
    Critical,
    High,
    Medium,
    Low,
}

#[derive(Parser, Debug)]
#[command(
    name = "buildguard",
    version,
    about = "Security posture scanner for build pipelines",
    long_about = "buildguard scans a source tree for hardcoded secrets, known-vulnerable \
                  dependency versions, and Dockerfile hardening issues, then renders a \
                  PASS/FAIL build decision from severity thresholds."
)]
pub struct Cli {
    /// Path to scan
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Write the JSON report to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Fail the build when findings at this severity level cross the policy thresholds
    #[arg(long = "fail-on", value_enum, default_value_t = FailLevel::Critical)]
    pub fail_on: FailLevel,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Terminal)]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
