//! Policy entity
//!
//! A policy binds one client to one policy type for a coverage window and a
//! coverage limit. The window must be well formed at construction: a policy
//! whose effective date falls after its expiry date cannot exist. Since
//! snapshots are deserialized straight into entities, deserialization routes
//! through the same check.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::{Amount, ClientId, InsuraDate, PolicyId, PolicyTypeId};

use crate::error::PolicyError;

/// The caller-supplied parts of a policy, before an id is minted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyDraft {
    pub client_id: ClientId,
    pub policy_type_id: PolicyTypeId,
    pub effective: InsuraDate,
    pub expiry: InsuraDate,
    pub coverage_limit: Amount,
}

impl PolicyDraft {
    /// Checks the coverage window without constructing a policy
    pub fn check_window(&self) -> Result<(), PolicyError> {
        check_coverage_window(self.effective, self.expiry)
    }
}

/// An issued policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PolicyParts")]
pub struct Policy {
    /// Minted identifier in the `PO<digits>` family
    pub id: PolicyId,
    /// The insured client
    pub client_id: ClientId,
    /// The product the policy is written against
    pub policy_type_id: PolicyTypeId,
    /// First day of coverage
    pub effective: InsuraDate,
    /// Last day of coverage, inclusive
    pub expiry: InsuraDate,
    /// Ceiling on the cumulative amount of claims against this policy
    pub coverage_limit: Amount,
}

impl Policy {
    /// Builds a policy, rejecting a window whose start lies after its end
    pub fn new(
        id: PolicyId,
        client_id: ClientId,
        policy_type_id: PolicyTypeId,
        effective: InsuraDate,
        expiry: InsuraDate,
        coverage_limit: Amount,
    ) -> Result<Self, PolicyError> {
        check_coverage_window(effective, expiry)?;
        Ok(Self {
            id,
            client_id,
            policy_type_id,
            effective,
            expiry,
            coverage_limit,
        })
    }

    /// Completes a draft under a freshly minted id
    pub fn issue(id: PolicyId, draft: PolicyDraft) -> Result<Self, PolicyError> {
        Self::new(
            id,
            draft.client_id,
            draft.policy_type_id,
            draft.effective,
            draft.expiry,
            draft.coverage_limit,
        )
    }

    /// True when the expiry falls in `[from, from + days]`, inclusive
    ///
    /// Already-expired policies never match.
    pub fn expires_within(&self, from: NaiveDate, days: i64) -> bool {
        self.expiry.within_days_after(from, days)
    }
}

fn check_coverage_window(effective: InsuraDate, expiry: InsuraDate) -> Result<(), PolicyError> {
    if effective > expiry {
        return Err(PolicyError::InvalidCoverageWindow { effective, expiry });
    }
    Ok(())
}

/// Serde-facing mirror of [`Policy`]; deserialization re-runs the window check
#[derive(Deserialize)]
struct PolicyParts {
    id: PolicyId,
    client_id: ClientId,
    policy_type_id: PolicyTypeId,
    effective: InsuraDate,
    expiry: InsuraDate,
    coverage_limit: Amount,
}

impl TryFrom<PolicyParts> for Policy {
    type Error = PolicyError;

    fn try_from(parts: PolicyParts) -> Result<Self, Self::Error> {
        Policy::new(
            parts.id,
            parts.client_id,
            parts.policy_type_id,
            parts.effective,
            parts.expiry,
            parts.coverage_limit,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(effective: &str, expiry: &str) -> PolicyDraft {
        PolicyDraft {
            client_id: ClientId::new("C1").unwrap(),
            policy_type_id: PolicyTypeId::new("P1").unwrap(),
            effective: InsuraDate::new(effective).unwrap(),
            expiry: InsuraDate::new(expiry).unwrap(),
            coverage_limit: Amount::new("1000").unwrap(),
        }
    }

    #[test]
    fn test_issue_accepts_ordered_window() {
        let policy = Policy::issue(
            PolicyId::new("PO0001").unwrap(),
            draft("2026-01-01", "2026-12-31"),
        )
        .unwrap();
        assert_eq!(policy.id.as_str(), "PO0001");
    }

    #[test]
    fn test_single_day_window_is_allowed() {
        assert!(Policy::issue(
            PolicyId::new("PO0001").unwrap(),
            draft("2026-06-01", "2026-06-01"),
        )
        .is_ok());
    }

    #[test]
    fn test_inverted_window_is_rejected() {
        let err = Policy::issue(
            PolicyId::new("PO0001").unwrap(),
            draft("2026-12-31", "2026-01-01"),
        )
        .unwrap_err();
        assert!(matches!(err, PolicyError::InvalidCoverageWindow { .. }));
    }

    #[test]
    fn test_draft_window_check_matches_construction() {
        assert!(draft("2026-01-01", "2026-12-31").check_window().is_ok());
        assert!(draft("2026-12-31", "2026-01-01").check_window().is_err());
    }

    #[test]
    fn test_expiry_window_query() {
        let policy = Policy::issue(
            PolicyId::new("PO0001").unwrap(),
            draft("2026-01-01", "2026-08-27"),
        )
        .unwrap();
        let today = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();
        assert!(policy.expires_within(today, 3));

        let long_gone = NaiveDate::from_ymd_opt(2026, 9, 25).unwrap();
        assert!(!policy.expires_within(long_gone, 3));
    }

    #[test]
    fn test_deserialization_rejects_inverted_window() {
        let doc = r#"{
            "id": "PO0001",
            "client_id": "C1",
            "policy_type_id": "P1",
            "effective": "2026-12-31",
            "expiry": "2026-01-01",
            "coverage_limit": "1000"
        }"#;
        assert!(serde_json::from_str::<Policy>(doc).is_err());
    }

    #[test]
    fn test_json_roundtrip() {
        let policy = Policy::issue(
            PolicyId::new("PO0007").unwrap(),
            draft("2026-01-01", "2026-12-31"),
        )
        .unwrap();
        let json = serde_json::to_string(&policy).unwrap();
        let back: Policy = serde_json::from_str(&json).unwrap();
        assert_eq!(policy, back);
    }
}
