//! Dockerfile hardening checks: a single forward pass over the build
//! script, tracking whether a non-root USER directive was ever seen.

use crate::rules::builtin::{self, DockerRuleKind};
use crate::rules::Finding;
use tracing::trace;

pub struct DockerScanner;

impl DockerScanner {
    pub fn new() -> Self {
        Self
    }

    /// Scan build-script content. USER directives update the running
    /// non-root state and produce no findings themselves; every other
    /// line is tested against each per-line rule independently, so one
    /// line can trigger several findings. If no non-root USER directive
    /// appeared anywhere, a single RUN_AS_ROOT finding is attributed to
    /// the last line.
    pub fn scan_content(&self, file: &str, content: &str) -> Vec<Finding> {
        let mut findings = Vec::new();
        let mut seen_non_root_user = false;
        let mut line_count = 0usize;

        for (idx, line) in content.lines().enumerate() {
            line_count = idx + 1;
            let trimmed = line.trim();

            if let Some(user) = user_directive_arg(trimmed) {
                if user != "root" {
                    seen_non_root_user = true;
                }
                continue;
            }

            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            for rule in builtin::docker_rules() {
                let matched = match rule.kind {
                    DockerRuleKind::LatestImage
                    | DockerRuleKind::RunSudo
                    | DockerRuleKind::ExposedPorts => rule
                        .pattern
                        .as_ref()
                        .is_some_and(|p| p.is_match(trimmed)),
                    // RUN_AS_ROOT is evaluated after the pass;
                    // NO_HEALTHCHECK is catalogued but dormant.
                    DockerRuleKind::RunAsRoot | DockerRuleKind::NoHealthcheck => false,
                };

                if matched {
                    findings.push(Finding::docker(
                        file,
                        idx + 1,
                        rule.id,
                        rule.severity,
                        rule.description,
                    ));
                }
            }
        }

        if !seen_non_root_user && line_count > 0 {
            let rule = builtin::docker_rule(DockerRuleKind::RunAsRoot);
            findings.push(Finding::docker(
                file,
                line_count,
                rule.id,
                rule.severity,
                rule.description,
            ));
        }

        trace!(file, findings = findings.len(), "dockerfile scan complete");
        findings
    }
}

impl Default for DockerScanner {
    fn default() -> Self {
        Self::new()
    }
}

/// The argument of a `USER` directive, or `None` if the line is not one.
fn user_directive_arg(line: &str) -> Option<&str> {
    let mut tokens = line.split_whitespace();
    if tokens.next() == Some("USER") {
        Some(tokens.next().unwrap_or(""))
    } else {
        None
    }
}
