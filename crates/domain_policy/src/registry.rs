//! Policy-type catalog and policy register
//!
//! Both collections keep insertion order. The catalog enforces the four-way
//! likeness rule from [`crate::policy_type`]; the register enforces two
//! uniqueness rules at once, the minted id and the (client, policy type)
//! coverage pair, because one client may hold at most one live policy per
//! product.

use indexmap::IndexMap;
use std::collections::HashSet;

use core_kernel::{ClientId, PolicyId, PolicyTypeId};

use crate::error::PolicyError;
use crate::policy::Policy;
use crate::policy_type::PolicyType;

/// Insertion-ordered catalog of policy types
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolicyTypeRegistry {
    types: IndexMap<PolicyTypeId, PolicyType>,
}

impl PolicyTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a policy type, rejecting any id or name overlap
    ///
    /// The candidate is compared against every existing entry; the first
    /// likeness that is not `Neither` aborts the insert and is reported in
    /// the error. On failure the catalog is unchanged.
    pub fn add(&mut self, policy_type: PolicyType) -> Result<(), PolicyError> {
        for existing in self.types.values() {
            let relation = existing.likeness(&policy_type);
            if relation.is_conflict() {
                return Err(PolicyError::ConflictingPolicyType {
                    existing: existing.id.clone(),
                    relation,
                });
            }
        }
        self.types.insert(policy_type.id.clone(), policy_type);
        Ok(())
    }

    /// Removes and returns the policy type with the given id
    pub fn remove(&mut self, id: &PolicyTypeId) -> Result<PolicyType, PolicyError> {
        self.types
            .shift_remove(id)
            .ok_or_else(|| PolicyError::type_not_found(id))
    }

    pub fn get(&self, id: &PolicyTypeId) -> Option<&PolicyType> {
        self.types.get(id)
    }

    pub fn contains(&self, id: &PolicyTypeId) -> bool {
        self.types.contains_key(id)
    }

    /// All policy types in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &PolicyType> {
        self.types.values()
    }

    /// Policy types satisfying `predicate`, in insertion order
    pub fn matching<'a, P>(&'a self, predicate: P) -> impl Iterator<Item = &'a PolicyType>
    where
        P: Fn(&PolicyType) -> bool + 'a,
    {
        self.types.values().filter(move |pt| predicate(pt))
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// Insertion-ordered register of issued policies
///
/// Lookup and removal go by [`PolicyId`]; duplicate detection additionally
/// tracks the (client, policy type) pair each live policy covers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolicyRegistry {
    policies: IndexMap<PolicyId, Policy>,
    covered_pairs: HashSet<(ClientId, PolicyTypeId)>,
}

impl PolicyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a policy, rejecting an id collision or an already-covered pair
    ///
    /// On failure the register is unchanged.
    pub fn add(&mut self, policy: Policy) -> Result<(), PolicyError> {
        if self.policies.contains_key(&policy.id) {
            return Err(PolicyError::DuplicatePolicy {
                id: policy.id.clone(),
            });
        }
        let pair = (policy.client_id.clone(), policy.policy_type_id.clone());
        if self.covered_pairs.contains(&pair) {
            return Err(PolicyError::CoverageAlreadyHeld {
                client_id: pair.0,
                policy_type_id: pair.1,
            });
        }
        self.covered_pairs.insert(pair);
        self.policies.insert(policy.id.clone(), policy);
        Ok(())
    }

    /// Removes and returns the policy with the given id, freeing its pair
    pub fn remove(&mut self, id: &PolicyId) -> Result<Policy, PolicyError> {
        let policy = self
            .policies
            .shift_remove(id)
            .ok_or_else(|| PolicyError::not_found(id))?;
        self.covered_pairs
            .remove(&(policy.client_id.clone(), policy.policy_type_id.clone()));
        Ok(policy)
    }

    pub fn get(&self, id: &PolicyId) -> Option<&Policy> {
        self.policies.get(id)
    }

    pub fn contains(&self, id: &PolicyId) -> bool {
        self.policies.contains_key(id)
    }

    /// True when the client already holds a live policy of this type
    pub fn covers(&self, client_id: &ClientId, policy_type_id: &PolicyTypeId) -> bool {
        self.covered_pairs
            .contains(&(client_id.clone(), policy_type_id.clone()))
    }

    /// All policies in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Policy> {
        self.policies.values()
    }

    /// Policies satisfying `predicate`, in insertion order
    pub fn matching<'a, P>(&'a self, predicate: P) -> impl Iterator<Item = &'a Policy>
    where
        P: Fn(&Policy) -> bool + 'a,
    {
        self.policies.values().filter(move |policy| predicate(policy))
    }

    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::{Amount, Description, InsuraDate, Name};

    fn policy_type(id: &str, name: &str) -> PolicyType {
        PolicyType::new(
            PolicyTypeId::new(id).unwrap(),
            Name::new(name).unwrap(),
            Description::new("covers the usual"),
            Amount::new("85.00").unwrap(),
        )
    }

    fn policy(id: &str, client: &str, policy_type: &str) -> Policy {
        Policy::new(
            PolicyId::new(id).unwrap(),
            ClientId::new(client).unwrap(),
            PolicyTypeId::new(policy_type).unwrap(),
            InsuraDate::new("2026-01-01").unwrap(),
            InsuraDate::new("2026-12-31").unwrap(),
            Amount::new("5000").unwrap(),
        )
        .unwrap()
    }

    mod catalog {
        use super::*;

        #[test]
        fn test_distinct_types_coexist() {
            let mut catalog = PolicyTypeRegistry::new();
            catalog.add(policy_type("P1", "Motor")).unwrap();
            catalog.add(policy_type("P2", "Home")).unwrap();
            assert_eq!(catalog.len(), 2);
        }

        #[test]
        fn test_shared_name_is_rejected() {
            let mut catalog = PolicyTypeRegistry::new();
            catalog.add(policy_type("P1", "Motor")).unwrap();
            let err = catalog.add(policy_type("P2", "Motor")).unwrap_err();
            match err {
                PolicyError::ConflictingPolicyType { existing, relation } => {
                    assert_eq!(existing.as_str(), "P1");
                    assert_eq!(relation, crate::policy_type::PolicyTypeMatch::NameOnly);
                }
                other => panic!("unexpected error: {other}"),
            }
            assert_eq!(catalog.len(), 1);
        }

        #[test]
        fn test_shared_id_is_rejected() {
            let mut catalog = PolicyTypeRegistry::new();
            catalog.add(policy_type("P1", "Motor")).unwrap();
            let err = catalog.add(policy_type("P1", "Home")).unwrap_err();
            assert!(matches!(
                err,
                PolicyError::ConflictingPolicyType {
                    relation: crate::policy_type::PolicyTypeMatch::IdOnly,
                    ..
                }
            ));
        }

        #[test]
        fn test_removing_a_type_frees_its_identity() {
            let mut catalog = PolicyTypeRegistry::new();
            catalog.add(policy_type("P1", "Motor")).unwrap();
            catalog.remove(&PolicyTypeId::new("P1").unwrap()).unwrap();
            assert!(catalog.add(policy_type("P1", "Motor")).is_ok());
        }

        #[test]
        fn test_remove_missing_type_fails() {
            let mut catalog = PolicyTypeRegistry::new();
            assert!(matches!(
                catalog.remove(&PolicyTypeId::new("P9").unwrap()),
                Err(PolicyError::PolicyTypeNotFound { .. })
            ));
        }
    }

    mod register {
        use super::*;

        #[test]
        fn test_lookup_is_by_policy_id() {
            let mut register = PolicyRegistry::new();
            register.add(policy("PO0001", "C1", "P1")).unwrap();
            let id = PolicyId::new("PO0001").unwrap();
            assert_eq!(register.get(&id).unwrap().client_id.as_str(), "C1");
        }

        #[test]
        fn test_same_pair_is_rejected() {
            let mut register = PolicyRegistry::new();
            register.add(policy("PO0001", "C1", "P1")).unwrap();
            let err = register.add(policy("PO0002", "C1", "P1")).unwrap_err();
            assert!(matches!(err, PolicyError::CoverageAlreadyHeld { .. }));
            assert_eq!(register.len(), 1);
        }

        #[test]
        fn test_same_client_different_type_is_allowed() {
            let mut register = PolicyRegistry::new();
            register.add(policy("PO0001", "C1", "P1")).unwrap();
            assert!(register.add(policy("PO0002", "C1", "P2")).is_ok());
        }

        #[test]
        fn test_same_type_different_client_is_allowed() {
            let mut register = PolicyRegistry::new();
            register.add(policy("PO0001", "C1", "P1")).unwrap();
            assert!(register.add(policy("PO0002", "C2", "P1")).is_ok());
        }

        #[test]
        fn test_id_collision_is_rejected() {
            let mut register = PolicyRegistry::new();
            register.add(policy("PO0001", "C1", "P1")).unwrap();
            let err = register.add(policy("PO0001", "C2", "P2")).unwrap_err();
            assert!(matches!(err, PolicyError::DuplicatePolicy { .. }));
        }

        #[test]
        fn test_removal_frees_the_pair() {
            let mut register = PolicyRegistry::new();
            register.add(policy("PO0001", "C1", "P1")).unwrap();
            register.remove(&PolicyId::new("PO0001").unwrap()).unwrap();
            assert!(!register.covers(
                &ClientId::new("C1").unwrap(),
                &PolicyTypeId::new("P1").unwrap()
            ));
            assert!(register.add(policy("PO0002", "C1", "P1")).is_ok());
        }

        #[test]
        fn test_failed_add_leaves_pairs_untouched() {
            let mut register = PolicyRegistry::new();
            register.add(policy("PO0001", "C1", "P1")).unwrap();
            let _ = register.add(policy("PO0001", "C9", "P9"));
            assert!(!register.covers(
                &ClientId::new("C9").unwrap(),
                &PolicyTypeId::new("P9").unwrap()
            ));
        }
    }
}
