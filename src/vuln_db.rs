//! Vulnerability table for known-bad dependency versions.
//!
//! The table maps lowercase package names to inclusive vulnerable version
//! ranges. The built-in table is embedded at compile time; an alternative
//! table can be loaded from a JSON file of the same shape.

use crate::rules::Severity;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Built-in vulnerability table (embedded at compile time)
const BUILTIN_DATABASE: &str = include_str!("data/vuln-database.json");

#[derive(Debug, Error)]
pub enum VulnDbError {
    #[error("Failed to read vulnerability database file: {0}")]
    ReadFile(#[from] std::io::Error),

    #[error("Failed to parse vulnerability database JSON: {0}")]
    ParseJson(#[from] serde_json::Error),
}

/// Dotted version triple. Missing components parse as zero; any present
/// non-numeric component degrades the whole triple to `0.0.0`, the minimum
/// version, so an unparseable version is treated as maximally vulnerable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version(pub u32, pub u32, pub u32);

impl Version {
    pub fn parse(s: &str) -> Self {
        let parts: Vec<&str> = s.trim().split('.').collect();
        let mut components = [0u32; 3];
        for (i, slot) in components.iter_mut().enumerate() {
            if let Some(part) = parts.get(i) {
                match part.trim().parse::<u32>() {
                    Ok(value) => *slot = value,
                    Err(_) => return Version(0, 0, 0),
                }
            }
        }
        Version(components[0], components[1], components[2])
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.0, self.1, self.2)
    }
}

/// Inclusive version range: `min <= v <= max`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionRange {
    pub min: String,
    pub max: String,
}

impl VersionRange {
    pub fn contains(&self, version: Version) -> bool {
        Version::parse(&self.min) <= version && version <= Version::parse(&self.max)
    }
}

/// One entry in the vulnerability table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VulnerabilityRecord {
    pub package: String,
    pub vulnerable_ranges: Vec<VersionRange>,
    pub severity: Severity,
    pub description: String,
}

impl VulnerabilityRecord {
    /// First range containing the version wins; ranges are not expected to
    /// overlap but the first-match policy is deliberate.
    pub fn matching_range(&self, version: Version) -> Option<&VersionRange> {
        self.vulnerable_ranges.iter().find(|r| r.contains(version))
    }
}

/// Vulnerability database file format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VulnDatabaseFile {
    pub version: String,
    pub updated_at: String,
    pub records: Vec<VulnerabilityRecord>,
}

/// Queryable vulnerability table.
pub struct VulnDatabase {
    records: Vec<VulnerabilityRecord>,
    version: String,
    updated_at: String,
}

impl VulnDatabase {
    /// Load the built-in table
    pub fn builtin() -> Result<Self, VulnDbError> {
        Self::from_json(BUILTIN_DATABASE)
    }

    /// Load a table from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, VulnDbError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Load a table from a JSON string
    pub fn from_json(json: &str) -> Result<Self, VulnDbError> {
        let file: VulnDatabaseFile = serde_json::from_str(json)?;
        Ok(Self {
            records: file.records,
            version: file.version,
            updated_at: file.updated_at,
        })
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn updated_at(&self) -> &str {
        &self.updated_at
    }

    pub fn records(&self) -> &[VulnerabilityRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Exact lowercase package-name lookup.
    pub fn lookup(&self, package: &str) -> Option<&VulnerabilityRecord> {
        self.records.iter().find(|r| r.package == package)
    }
}

impl Default for VulnDatabase {
    fn default() -> Self {
        Self::builtin().expect("Built-in vulnerability database should be valid")
    }
}
