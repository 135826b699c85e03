pub mod cli;
pub mod decision;
pub mod error;
pub mod handlers;
pub mod reporter;
pub mod rules;
pub mod run;
pub mod scanner;
pub mod vuln_db;

#[cfg(test)]
pub mod test_utils;

pub use cli::{Cli, FailLevel, OutputFormat};
pub use decision::{evaluate, Decision, Policy, PolicyStore, PolicyViolation};
pub use error::{Result, ScanError};
pub use reporter::{json::JsonReporter, terminal::TerminalReporter, Reporter};
pub use rules::{Category, Finding, Report, Severity, Statistics, Status};
pub use run::{ScanOutcome, ScanRunner, ScanWarning};
pub use scanner::{DependencyScanner, DockerScanner, SecretScanner};
pub use vuln_db::{Version, VulnDatabase, VulnerabilityRecord};
