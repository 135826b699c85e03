//! Threshold-based build decision.
//!
//! The policy is an explicit value passed into every evaluation, so a
//! decision always sees a consistent pair of thresholds. Callers that
//! share one policy across threads go through [`PolicyStore`], which
//! hands out atomic snapshots.

use crate::rules::{Finding, Severity, Status};
use serde::{Deserialize, Serialize};
use std::sync::{PoisonError, RwLock};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    pub critical_threshold: usize,
    pub high_threshold: usize,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            critical_threshold: 1,
            high_threshold: 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyViolation {
    CriticalThreshold,
    HighThreshold,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Decision {
    pub status: Status,
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy_violated: Option<PolicyViolation>,
}

/// Tally critical and high findings and compare against the policy.
/// The critical threshold is checked first: critical always trumps high.
pub fn evaluate(findings: &[Finding], policy: &Policy) -> Decision {
    let critical_count = findings
        .iter()
        .filter(|f| f.severity == Severity::Critical)
        .count();
    let high_count = findings
        .iter()
        .filter(|f| f.severity == Severity::High)
        .count();

    if critical_count >= policy.critical_threshold {
        return Decision {
            status: Status::Fail,
            reason: format!("Found {} CRITICAL severity issues", critical_count),
            policy_violated: Some(PolicyViolation::CriticalThreshold),
        };
    }

    if high_count >= policy.high_threshold {
        return Decision {
            status: Status::Fail,
            reason: format!(
                "Found {} HIGH severity issues (threshold: {})",
                high_count, policy.high_threshold
            ),
            policy_violated: Some(PolicyViolation::HighThreshold),
        };
    }

    Decision {
        status: Status::Pass,
        reason: "All findings within acceptable thresholds".to_string(),
        policy_violated: None,
    }
}

/// Shared, synchronized policy. Reads return a snapshot of both
/// thresholds taken under the lock; partial updates hold the write lock
/// for the whole update, so no reader ever observes a half-applied
/// policy.
#[derive(Debug, Default)]
pub struct PolicyStore {
    inner: RwLock<Policy>,
}

impl PolicyStore {
    pub fn new(policy: Policy) -> Self {
        Self {
            inner: RwLock::new(policy),
        }
    }

    /// Snapshot of the current policy.
    pub fn get(&self) -> Policy {
        *self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Partially update the policy; absent arguments leave the
    /// corresponding threshold unchanged. Returns the resulting policy.
    pub fn update(
        &self,
        critical_threshold: Option<usize>,
        high_threshold: Option<usize>,
    ) -> Policy {
        let mut policy = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(critical) = critical_threshold {
            policy.critical_threshold = critical;
        }
        if let Some(high) = high_threshold {
            policy.high_threshold = high;
        }
        *policy
    }

    /// Evaluate findings against a snapshot of the stored policy.
    pub fn evaluate(&self, findings: &[Finding]) -> Decision {
        evaluate(findings, &self.get())
    }
}
