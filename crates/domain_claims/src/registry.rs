//! Claim registry and cumulative-amount queries

use indexmap::IndexMap;
use rust_decimal::Decimal;

use core_kernel::{ClaimId, PolicyId};

use crate::claim::Claim;
use crate::error::ClaimError;

/// Insertion-ordered, id-unique collection of filed claims
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClaimRegistry {
    claims: IndexMap<ClaimId, Claim>,
}

impl ClaimRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a claim, rejecting a duplicate id
    pub fn add(&mut self, claim: Claim) -> Result<(), ClaimError> {
        if self.claims.contains_key(&claim.id) {
            return Err(ClaimError::DuplicateClaim {
                id: claim.id.clone(),
            });
        }
        self.claims.insert(claim.id.clone(), claim);
        Ok(())
    }

    /// Removes and returns the claim with the given id
    pub fn remove(&mut self, id: &ClaimId) -> Result<Claim, ClaimError> {
        self.claims
            .shift_remove(id)
            .ok_or_else(|| ClaimError::not_found(id))
    }

    pub fn get(&self, id: &ClaimId) -> Option<&Claim> {
        self.claims.get(id)
    }

    pub fn contains(&self, id: &ClaimId) -> bool {
        self.claims.contains_key(id)
    }

    /// All claims in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Claim> {
        self.claims.values()
    }

    /// Claims satisfying `predicate`, in insertion order
    pub fn matching<'a, P>(&'a self, predicate: P) -> impl Iterator<Item = &'a Claim>
    where
        P: Fn(&Claim) -> bool + 'a,
    {
        self.claims.values().filter(move |claim| predicate(claim))
    }

    /// Claims filed against the given policy, in insertion order
    pub fn against_policy<'a>(&'a self, policy_id: &'a PolicyId) -> impl Iterator<Item = &'a Claim> {
        self.claims
            .values()
            .filter(move |claim| &claim.policy_id == policy_id)
    }

    /// Sum of the amounts claimed against the given policy
    pub fn total_claimed_against(&self, policy_id: &PolicyId) -> Decimal {
        self.against_policy(policy_id)
            .map(|claim| claim.amount.value())
            .sum()
    }

    pub fn len(&self) -> usize {
        self.claims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claim::ClaimDraft;
    use core_kernel::{Amount, ClientId, Description, InsuraDate};
    use rust_decimal_macros::dec;

    fn claim(id: &str, policy: &str, amount: &str) -> Claim {
        Claim::file(
            ClaimId::new(id).unwrap(),
            ClaimDraft {
                client_id: ClientId::new("C1").unwrap(),
                policy_id: PolicyId::new(policy).unwrap(),
                amount: Amount::new(amount).unwrap(),
                date: InsuraDate::new("2026-05-10").unwrap(),
                description: Description::new(""),
            },
        )
    }

    #[test]
    fn test_duplicate_id_is_rejected() {
        let mut registry = ClaimRegistry::new();
        registry.add(claim("C0001", "PO0001", "100")).unwrap();
        assert!(matches!(
            registry.add(claim("C0001", "PO0002", "50")),
            Err(ClaimError::DuplicateClaim { .. })
        ));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_total_sums_only_the_given_policy() {
        let mut registry = ClaimRegistry::new();
        registry.add(claim("C0001", "PO0001", "100.50")).unwrap();
        registry.add(claim("C0002", "PO0001", "200")).unwrap();
        registry.add(claim("C0003", "PO0002", "999")).unwrap();

        let total = registry.total_claimed_against(&PolicyId::new("PO0001").unwrap());
        assert_eq!(total, dec!(300.50));
    }

    #[test]
    fn test_total_for_unclaimed_policy_is_zero() {
        let registry = ClaimRegistry::new();
        let total = registry.total_claimed_against(&PolicyId::new("PO0009").unwrap());
        assert_eq!(total, Decimal::ZERO);
    }

    #[test]
    fn test_removal_lowers_the_total() {
        let mut registry = ClaimRegistry::new();
        registry.add(claim("C0001", "PO0001", "100")).unwrap();
        registry.add(claim("C0002", "PO0001", "200")).unwrap();
        registry.remove(&ClaimId::new("C0001").unwrap()).unwrap();

        let total = registry.total_claimed_against(&PolicyId::new("PO0001").unwrap());
        assert_eq!(total, dec!(200));
    }

    #[test]
    fn test_against_policy_preserves_order() {
        let mut registry = ClaimRegistry::new();
        registry.add(claim("C0003", "PO0001", "10")).unwrap();
        registry.add(claim("C0001", "PO0002", "20")).unwrap();
        registry.add(claim("C0002", "PO0001", "30")).unwrap();

        let policy_id = PolicyId::new("PO0001").unwrap();
        let ids: Vec<&str> = registry
            .against_policy(&policy_id)
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(ids, ["C0003", "C0002"]);
    }
}
