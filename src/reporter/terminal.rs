use crate::reporter::Reporter;
use crate::rules::{Finding, Report, Severity, Status};
use colored::Colorize;

pub struct TerminalReporter {
    verbose: bool,
}

impl TerminalReporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    fn severity_label(&self, severity: &Severity) -> colored::ColoredString {
        let label = format!("[{}]", severity);
        match severity {
            Severity::Critical => label.red().bold(),
            Severity::High => label.yellow().bold(),
            Severity::Medium => label.cyan(),
            Severity::Low => label.white(),
        }
    }

    fn format_finding(&self, finding: &Finding) -> String {
        let mut output = String::new();

        let location = match (&finding.file, finding.line) {
            (file, Some(line)) if !file.is_empty() => format!("{}:{}", file, line),
            (file, None) if !file.is_empty() => file.clone(),
            _ => finding
                .package
                .clone()
                .unwrap_or_else(|| "-".to_string()),
        };

        output.push_str(&format!(
            "{} {:10} {} {}\n",
            self.severity_label(&finding.severity),
            finding.category.as_str(),
            location,
            finding.message
        ));

        if self.verbose {
            output.push_str(&format!("  Rule: {}\n", finding.rule));
            if let Some(ref evidence) = finding.redacted_match {
                output.push_str(&format!("  Match: {}\n", evidence.dimmed()));
            }
            if let (Some(current), Some(safe)) =
                (&finding.current_version, &finding.safe_version)
            {
                output.push_str(&format!("  Version: {} (safe: {})\n", current, safe));
            }
        }

        output
    }
}

impl Reporter for TerminalReporter {
    fn report(&self, report: &Report) -> String {
        let mut output = String::new();

        output.push_str(&format!("Scanning: {}\n\n", report.project.bold()));
        output.push_str("SCAN RESULTS:\n");
        output.push_str(&format!(
            "  Critical: {}\n",
            report.statistics.critical.to_string().red()
        ));
        output.push_str(&format!(
            "  High:     {}\n",
            report.statistics.high.to_string().yellow()
        ));
        output.push_str(&format!(
            "  Medium:   {}\n",
            report.statistics.medium.to_string().cyan()
        ));
        output.push_str(&format!("  Low:      {}\n", report.statistics.low));

        if !report.findings.is_empty() {
            output.push_str(&format!(
                "\nFINDINGS ({} issues):\n\n",
                report.findings.len()
            ));
            for finding in &report.findings {
                output.push_str(&self.format_finding(finding));
            }
        }

        output.push('\n');
        match report.status {
            Status::Pass => output.push_str(&format!("{}\n", "BUILD PASSED".green().bold())),
            Status::Fail => output.push_str(&format!("{}\n", "BUILD FAILED".red().bold())),
        }

        output
    }
}
