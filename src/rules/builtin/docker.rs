use crate::rules::types::Severity;
use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DockerRuleKind {
    RunAsRoot,
    LatestImage,
    RunSudo,
    ExposedPorts,
    NoHealthcheck,
}

/// One Dockerfile hardening rule. `pattern` is `None` for rules that are
/// not plain per-line matches (RUN_AS_ROOT tracks USER directives across
/// the whole file).
#[derive(Debug)]
pub struct DockerRule {
    pub kind: DockerRuleKind,
    pub id: &'static str,
    pub pattern: Option<Regex>,
    pub severity: Severity,
    pub description: &'static str,
    pub solution: &'static str,
}

pub(super) fn rules() -> Vec<DockerRule> {
    vec![
        run_as_root(),
        latest_image(),
        run_sudo(),
        exposed_ports(),
        no_healthcheck(),
    ]
}

fn run_as_root() -> DockerRule {
    DockerRule {
        kind: DockerRuleKind::RunAsRoot,
        id: "RUN_AS_ROOT",
        pattern: None,
        severity: Severity::High,
        description: "Missing USER directive - container runs as root",
        solution: "Add 'USER nonroot' at the end of Dockerfile",
    }
}

fn latest_image() -> DockerRule {
    DockerRule {
        kind: DockerRuleKind::LatestImage,
        id: "LATEST_IMAGE",
        pattern: Some(Regex::new(r"^FROM\s+\S+:latest").expect("LATEST_IMAGE: invalid regex")),
        severity: Severity::Medium,
        description: "Using 'latest' tag - unpredictable builds",
        solution: "Pin to specific image version, e.g. 'ubuntu:22.04'",
    }
}

fn run_sudo() -> DockerRule {
    DockerRule {
        kind: DockerRuleKind::RunSudo,
        id: "RUN_SUDO",
        pattern: Some(Regex::new(r"(?i)RUN.*sudo").expect("RUN_SUDO: invalid regex")),
        severity: Severity::Medium,
        description: "Using sudo in Dockerfile",
        solution: "Use package managers directly without sudo",
    }
}

fn exposed_ports() -> DockerRule {
    DockerRule {
        kind: DockerRuleKind::ExposedPorts,
        id: "EXPOSED_PORTS",
        pattern: Some(Regex::new(r"^EXPOSE\s+\d+").expect("EXPOSED_PORTS: invalid regex")),
        severity: Severity::Low,
        description: "Port exposed - verify it's intentional",
        solution: "Review exposed ports for necessity",
    }
}

// Present in the catalog but not wired into the checker. Inert until a
// severity and trigger condition are confirmed.
fn no_healthcheck() -> DockerRule {
    DockerRule {
        kind: DockerRuleKind::NoHealthcheck,
        id: "NO_HEALTHCHECK",
        pattern: Some(Regex::new(r"HEALTHCHECK").expect("NO_HEALTHCHECK: invalid regex")),
        severity: Severity::Low,
        description: "No HEALTHCHECK defined",
        solution: "Add HEALTHCHECK instruction for container monitoring",
    }
}
