use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn cmd() -> Command {
    Command::cargo_bin("buildguard").unwrap()
}

mod vulnerable_project {
    use super::*;

    #[test]
    fn test_scan_fails_with_exit_code_one() {
        cmd()
            .arg(fixtures_path().join("vulnerable-project"))
            .assert()
            .failure()
            .code(1)
            .stdout(predicate::str::contains("BUILD FAILED"));
    }

    #[test]
    fn test_detects_hardcoded_aws_key() {
        cmd()
            .arg(fixtures_path().join("vulnerable-project"))
            .assert()
            .stdout(predicate::str::contains("AWS_ACCESS_KEY"))
            .stdout(predicate::str::contains("CRITICAL"));
    }

    #[test]
    fn test_detects_vulnerable_log4j() {
        cmd()
            .arg(fixtures_path().join("vulnerable-project"))
            .assert()
            .stdout(predicate::str::contains("log4j@2.15.0"));
    }

    #[test]
    fn test_detects_nested_lockfile_dependency() {
        cmd()
            .arg(fixtures_path().join("vulnerable-project"))
            .assert()
            .stdout(predicate::str::contains("pyyaml@5.3.1"));
    }

    #[test]
    fn test_detects_dockerfile_hardening_issues() {
        cmd()
            .arg(fixtures_path().join("vulnerable-project"))
            .assert()
            .stdout(predicate::str::contains("latest"))
            .stdout(predicate::str::contains("sudo"))
            .stdout(predicate::str::contains("runs as root"));
    }

    #[test]
    fn test_json_report_shape() {
        let output = cmd()
            .arg(fixtures_path().join("vulnerable-project"))
            .arg("--format")
            .arg("json")
            .output()
            .unwrap();

        let report: serde_json::Value =
            serde_json::from_slice(&output.stdout).expect("stdout should be a JSON report");

        assert_eq!(report["project"], "vulnerable-project");
        assert_eq!(report["status"], "FAIL");

        let stats = &report["statistics"];
        let findings = report["findings"].as_array().unwrap();
        assert_eq!(stats["total"].as_u64().unwrap() as usize, findings.len());

        let tally = |severity: &str| {
            findings
                .iter()
                .filter(|f| f["severity"] == severity)
                .count() as u64
        };
        assert_eq!(stats["critical"].as_u64().unwrap(), tally("CRITICAL"));
        assert_eq!(stats["high"].as_u64().unwrap(), tally("HIGH"));
        assert_eq!(stats["medium"].as_u64().unwrap(), tally("MEDIUM"));
        assert_eq!(stats["low"].as_u64().unwrap(), tally("LOW"));
    }

    #[test]
    fn test_findings_are_ordered_by_checker() {
        let output = cmd()
            .arg(fixtures_path().join("vulnerable-project"))
            .arg("--format")
            .arg("json")
            .output()
            .unwrap();
        let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

        let types: Vec<String> = report["findings"]
            .as_array()
            .unwrap()
            .iter()
            .map(|f| f["type"].as_str().unwrap().to_string())
            .collect();

        let rank = |t: &str| match t {
            "SECRET" => 0,
            "DEPENDENCY" => 1,
            _ => 2,
        };
        assert!(types.windows(2).all(|w| rank(&w[0]) <= rank(&w[1])));
        assert!(types.contains(&"SECRET".to_string()));
        assert!(types.contains(&"DEPENDENCY".to_string()));
        assert!(types.contains(&"DOCKER".to_string()));
    }

    #[test]
    fn test_secret_evidence_is_redacted() {
        let output = cmd()
            .arg(fixtures_path().join("vulnerable-project"))
            .arg("--format")
            .arg("json")
            .output()
            .unwrap();
        let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

        for finding in report["findings"].as_array().unwrap() {
            if let Some(evidence) = finding["match"].as_str() {
                assert!(evidence.chars().count() <= 23);
            }
        }
    }

    #[test]
    fn test_output_flag_saves_report() {
        let dir = tempfile::TempDir::new().unwrap();
        let report_path = dir.path().join("report.json");

        cmd()
            .arg(fixtures_path().join("vulnerable-project"))
            .arg("--output")
            .arg(&report_path)
            .assert()
            .code(1);

        let saved = fs::read_to_string(&report_path).unwrap();
        let report: serde_json::Value = serde_json::from_str(&saved).unwrap();
        assert_eq!(report["status"], "FAIL");
        assert!(report["statistics"]["total"].as_u64().unwrap() > 0);
    }

    #[test]
    fn test_repeated_scans_are_idempotent() {
        let run = || {
            let output = cmd()
                .arg(fixtures_path().join("vulnerable-project"))
                .arg("--format")
                .arg("json")
                .output()
                .unwrap();
            let mut report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
            // The timestamp is the only field allowed to differ
            report.as_object_mut().unwrap().remove("timestamp");
            report
        };
        assert_eq!(run(), run());
    }
}

mod clean_project {
    use super::*;

    #[test]
    fn test_scan_passes_with_exit_code_zero() {
        cmd()
            .arg(fixtures_path().join("clean-project"))
            .assert()
            .success()
            .stdout(predicate::str::contains("BUILD PASSED"));
    }

    #[test]
    fn test_no_findings_reported() {
        let output = cmd()
            .arg(fixtures_path().join("clean-project"))
            .arg("--format")
            .arg("json")
            .output()
            .unwrap();
        let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(report["status"], "PASS");
        assert_eq!(report["statistics"]["total"], 0);
    }
}

mod fail_on_levels {
    use super::*;

    fn high_only_project() -> tempfile::TempDir {
        let dir = tempfile::TempDir::new().unwrap();
        fs::write(
            dir.path().join("creds.py"),
            "a_password = \"aaaaaaaaaaaa\"\nb_password = \"bbbbbbbbbbbb\"\nc_password = \"cccccccccccc\"\n",
        )
        .unwrap();
        dir
    }

    #[test]
    fn test_high_findings_pass_at_default_critical_level() {
        // The report itself says FAIL, but --fail-on critical only gates
        // on critical findings
        let dir = high_only_project();
        cmd()
            .arg(dir.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("BUILD FAILED"));
    }

    #[test]
    fn test_high_findings_fail_at_high_level() {
        let dir = high_only_project();
        cmd()
            .arg(dir.path())
            .arg("--fail-on")
            .arg("high")
            .assert()
            .failure()
            .code(1);
    }

    #[test]
    fn test_two_high_findings_pass_at_high_level() {
        let dir = tempfile::TempDir::new().unwrap();
        fs::write(
            dir.path().join("creds.py"),
            "a_password = \"aaaaaaaaaaaa\"\nb_password = \"bbbbbbbbbbbb\"\n",
        )
        .unwrap();

        cmd()
            .arg(dir.path())
            .arg("--fail-on")
            .arg("high")
            .assert()
            .success();
    }
}

mod errors {
    use super::*;

    #[test]
    fn test_missing_target_exits_two() {
        cmd()
            .arg("/nonexistent/project")
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("Target not found"));
    }

    #[test]
    fn test_file_target_exits_two() {
        cmd()
            .arg(fixtures_path().join("clean-project/app.py"))
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("not a directory"));
    }
}
