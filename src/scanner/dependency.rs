//! Dependency vulnerability checking for flat and tree-shaped manifests.

use crate::rules::Finding;
use crate::vuln_db::{Version, VulnDatabase};
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;
use tracing::trace;

/// `name`, optionally followed by a comparison operator and a version.
/// Lines that do not fit this shape are skipped, not errored.
static REQUIREMENT_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z0-9._-]+)(?:==|>=|<=|>|<)?(.*)$")
        .expect("REQUIREMENT_LINE: invalid regex")
});

pub struct DependencyScanner {
    db: VulnDatabase,
}

impl DependencyScanner {
    pub fn new() -> Self {
        Self {
            db: VulnDatabase::default(),
        }
    }

    pub fn with_database(db: VulnDatabase) -> Self {
        Self { db }
    }

    /// Check a flat manifest: one `name[<op>version]` entry per line.
    /// Names are lowercased before lookup; a missing version defaults to
    /// `0.0.0`, the minimum, which matches every open-bottom range.
    pub fn check_flat_manifest(&self, content: &str) -> Vec<Finding> {
        let mut findings = Vec::new();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some(caps) = REQUIREMENT_LINE.captures(line) else {
                continue;
            };

            let package = caps[1].to_lowercase();
            let version = match caps.get(2).map(|m| m.as_str()) {
                Some("") | None => "0.0.0",
                Some(v) => v,
            };

            self.check_package(&package, version, &mut findings);
        }

        findings
    }

    /// Check a tree-shaped lockfile: a nested JSON document whose
    /// `dependencies` object maps package names to nodes carrying a
    /// `version` field and, possibly, their own `dependencies`. A node
    /// without a version is skipped; a malformed document yields no
    /// findings at all.
    pub fn check_lock_tree(&self, content: &str) -> Vec<Finding> {
        let doc: Value = match serde_json::from_str(content) {
            Ok(doc) => doc,
            Err(e) => {
                trace!(error = %e, "unparseable lock tree, skipping");
                return Vec::new();
            }
        };

        let mut findings = Vec::new();
        if let Some(nodes) = node_children(&doc) {
            for (name, node) in nodes {
                self.walk_node(name, node, &mut findings);
            }
        }
        findings
    }

    fn walk_node(&self, name: &str, node: &Value, findings: &mut Vec<Finding>) {
        if let Some(version) = node_version(node) {
            self.check_package(&name.to_lowercase(), version, findings);
        }

        if let Some(children) = node_children(node) {
            for (child_name, child) in children {
                self.walk_node(child_name, child, findings);
            }
        }
    }

    fn check_package(&self, package: &str, version: &str, findings: &mut Vec<Finding>) {
        let Some(record) = self.db.lookup(package) else {
            return;
        };

        if let Some(range) = record.matching_range(Version::parse(version)) {
            findings.push(Finding::dependency(
                package,
                version,
                range.max.clone(),
                record.severity,
                record.description.clone(),
            ));
        }
    }
}

impl Default for DependencyScanner {
    fn default() -> Self {
        Self::new()
    }
}

// The checker only ever asks a node for its version field and its child
// nodes, so swapping the document parser means reimplementing these two
// accessors.

fn node_version(node: &Value) -> Option<&str> {
    node.get("version").and_then(Value::as_str)
}

fn node_children(node: &Value) -> Option<&serde_json::Map<String, Value>> {
    node.get("dependencies").and_then(Value::as_object)
}
