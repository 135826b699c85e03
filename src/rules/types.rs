use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "LOW",
            Severity::Medium => "MEDIUM",
            Severity::High => "HIGH",
            Severity::Critical => "CRITICAL",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Secret,
    Dependency,
    Docker,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Secret => "SECRET",
            Category::Dependency => "DEPENDENCY",
            Category::Docker => "DOCKER",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Pass,
    Fail,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pass => "PASS",
            Status::Fail => "FAIL",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One detected issue. Built by a checker, never mutated afterwards.
///
/// `file` is empty for findings that are not tied to a file location
/// (dependency findings); `line` is absent for the same reason. The
/// `package`/`current_version`/`safe_version` fields are only populated
/// for dependency findings and are omitted from serialized output
/// everywhere else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    #[serde(rename = "type")]
    pub category: Category,
    pub severity: Severity,
    #[serde(default)]
    pub file: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    pub rule: String,
    pub message: String,
    #[serde(
        rename = "match",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub redacted_match: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safe_version: Option<String>,
}

impl Finding {
    pub fn secret(
        file: impl Into<String>,
        line: usize,
        rule: impl Into<String>,
        severity: Severity,
        redacted_match: String,
    ) -> Self {
        let rule = rule.into();
        Self {
            category: Category::Secret,
            severity,
            file: file.into(),
            line: Some(line),
            message: format!("Potential {} detected", rule),
            rule,
            redacted_match: Some(redacted_match),
            package: None,
            current_version: None,
            safe_version: None,
        }
    }

    pub fn dependency(
        package: impl Into<String>,
        current_version: impl Into<String>,
        safe_version: impl Into<String>,
        severity: Severity,
        advisory: impl Into<String>,
    ) -> Self {
        let package = package.into();
        let current_version = current_version.into();
        let advisory = advisory.into();
        Self {
            category: Category::Dependency,
            severity,
            file: String::new(),
            line: None,
            message: format!(
                "Vulnerable {}@{}: {}",
                package, current_version, advisory
            ),
            rule: advisory,
            redacted_match: None,
            package: Some(package),
            current_version: Some(current_version),
            safe_version: Some(safe_version.into()),
        }
    }

    pub fn docker(
        file: impl Into<String>,
        line: usize,
        rule: impl Into<String>,
        severity: Severity,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category: Category::Docker,
            severity,
            file: file.into(),
            line: Some(line),
            rule: rule.into(),
            message: message.into(),
            redacted_match: None,
            package: None,
            current_version: None,
            safe_version: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub total: usize,
}

impl Statistics {
    pub fn from_findings(findings: &[Finding]) -> Self {
        let (critical, high, medium, low) =
            findings
                .iter()
                .fold((0, 0, 0, 0), |(c, h, m, l), f| match f.severity {
                    Severity::Critical => (c + 1, h, m, l),
                    Severity::High => (c, h + 1, m, l),
                    Severity::Medium => (c, h, m + 1, l),
                    Severity::Low => (c, h, m, l + 1),
                });

        Self {
            critical,
            high,
            medium,
            low,
            total: findings.len(),
        }
    }
}

/// Aggregated result of one scan. Finding order is discovery order:
/// secrets in file-traversal order, then dependency findings, then
/// build-script findings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub project: String,
    pub timestamp: String,
    pub status: Status,
    pub statistics: Statistics,
    pub findings: Vec<Finding>,
}
