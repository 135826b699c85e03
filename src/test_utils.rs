#[cfg(test)]
pub mod fixtures {
    use crate::decision::{self, Policy};
    use crate::rules::{Finding, Report, Severity, Statistics};

    pub fn create_test_report(findings: Vec<Finding>) -> Report {
        let statistics = Statistics::from_findings(&findings);
        let decision = decision::evaluate(&findings, &Policy::default());
        Report {
            project: "test-project".to_string(),
            timestamp: "2026-07-14T12:00:00+00:00".to_string(),
            status: decision.status,
            statistics,
            findings,
        }
    }

    pub fn create_finding(rule: &str, severity: Severity, file: &str, line: usize) -> Finding {
        Finding::secret(file, line, rule, severity, "evidence***".to_string())
    }
}
