//! The book aggregate
//!
//! [`Book`] is the single root every command goes through. It owns the four
//! registries and the two minting counters, so the cross-registry rules have
//! one home: policy issuance checks its references before a policy id is
//! minted, and claim filing runs a fixed rule chain before a claim id is
//! minted. A failed operation leaves every registry and both counters exactly
//! as they were.
//!
//! Reads are served as plain iterators or collected views over the live
//! registries; callers re-read after each mutation instead of holding
//! observable handles.

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;

use core_kernel::{ClaimId, ClientId, IdSequence, PolicyId, PolicyTypeId};
use domain_claims::{Claim, ClaimDraft, ClaimError, ClaimRegistry};
use domain_client::{Client, ClientError, ClientRegistry};
use domain_policy::{Policy, PolicyDraft, PolicyError, PolicyRegistry, PolicyType, PolicyTypeRegistry};

use crate::error::BookResult;

/// How many days ahead the expiring-policies view looks, today included
pub const EXPIRY_WINDOW_DAYS: i64 = 3;

/// The full in-memory state of one insurance book
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Book {
    clients: ClientRegistry,
    policy_types: PolicyTypeRegistry,
    policies: PolicyRegistry,
    claims: ClaimRegistry,
    policy_ids: IdSequence<PolicyId>,
    claim_ids: IdSequence<ClaimId>,
}

impl Book {
    /// An empty book with both counters at their start value
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Clients
    // ------------------------------------------------------------------

    /// Registers a client under its caller-chosen id
    pub fn add_client(&mut self, client: Client) -> BookResult<()> {
        self.clients.add(client)?;
        Ok(())
    }

    /// Removes a client record.
    ///
    /// Removal does not cascade: policies and claims that reference the
    /// removed client stay in the book, and the read views tolerate the
    /// dangling reference.
    pub fn remove_client(&mut self, id: &ClientId) -> BookResult<Client> {
        Ok(self.clients.remove(id)?)
    }

    pub fn find_client(&self, id: &ClientId) -> Option<&Client> {
        self.clients.get(id)
    }

    /// All clients in registration order
    pub fn clients(&self) -> impl Iterator<Item = &Client> {
        self.clients.iter()
    }

    /// Clients whose name contains `keyword`, ignoring case
    pub fn clients_named<'a>(&'a self, keyword: &'a str) -> Vec<&'a Client> {
        self.clients
            .matching(|client| client.name_contains(keyword))
            .collect()
    }

    /// Clients whose birthday month and day fall on `date`
    pub fn birthday_clients_on(&self, date: NaiveDate) -> Vec<&Client> {
        self.clients
            .matching(move |client| client.has_birthday_on(date))
            .collect()
    }

    /// Clients whose birthday falls on the local calendar date
    pub fn birthday_clients(&self) -> Vec<&Client> {
        self.birthday_clients_on(Local::now().date_naive())
    }

    // ------------------------------------------------------------------
    // Policy types
    // ------------------------------------------------------------------

    /// Adds a product to the catalog, subject to the likeness rule
    pub fn add_policy_type(&mut self, policy_type: PolicyType) -> BookResult<()> {
        self.policy_types.add(policy_type)?;
        Ok(())
    }

    /// Removes a policy type; policies written against it are untouched
    pub fn remove_policy_type(&mut self, id: &PolicyTypeId) -> BookResult<PolicyType> {
        Ok(self.policy_types.remove(id)?)
    }

    pub fn find_policy_type(&self, id: &PolicyTypeId) -> Option<&PolicyType> {
        self.policy_types.get(id)
    }

    /// All policy types in catalog order
    pub fn policy_types(&self) -> impl Iterator<Item = &PolicyType> {
        self.policy_types.iter()
    }

    // ------------------------------------------------------------------
    // Policies
    // ------------------------------------------------------------------

    /// Issues a policy from a draft, minting the next policy id.
    ///
    /// The draft is checked before the id is minted: the client and policy
    /// type must exist, the coverage window must be ordered, and the
    /// (client, policy type) pair must not already be covered. A rejected
    /// draft therefore never consumes an id.
    pub fn add_policy(&mut self, draft: PolicyDraft) -> BookResult<PolicyId> {
        if !self.clients.contains(&draft.client_id) {
            return Err(ClientError::not_found(&draft.client_id).into());
        }
        if !self.policy_types.contains(&draft.policy_type_id) {
            return Err(PolicyError::type_not_found(&draft.policy_type_id).into());
        }
        draft.check_window()?;
        if self.policies.covers(&draft.client_id, &draft.policy_type_id) {
            return Err(PolicyError::CoverageAlreadyHeld {
                client_id: draft.client_id.clone(),
                policy_type_id: draft.policy_type_id.clone(),
            }
            .into());
        }

        let id = self.policy_ids.mint();
        let policy = Policy::issue(id.clone(), draft)?;
        self.policies.add(policy)?;
        Ok(id)
    }

    /// Removes a policy; claims filed against it are untouched
    pub fn remove_policy(&mut self, id: &PolicyId) -> BookResult<Policy> {
        Ok(self.policies.remove(id)?)
    }

    pub fn find_policy(&self, id: &PolicyId) -> Option<&Policy> {
        self.policies.get(id)
    }

    /// All policies in issue order
    pub fn policies(&self) -> impl Iterator<Item = &Policy> {
        self.policies.iter()
    }

    /// Policies whose expiry falls within [`EXPIRY_WINDOW_DAYS`] of `date`
    ///
    /// Both ends of the window are inclusive; already-expired policies are
    /// not reported.
    pub fn expiring_policies_on(&self, date: NaiveDate) -> Vec<&Policy> {
        self.policies
            .matching(move |policy| policy.expires_within(date, EXPIRY_WINDOW_DAYS))
            .collect()
    }

    /// Policies expiring within the window starting at the local date
    pub fn expiring_policies(&self) -> Vec<&Policy> {
        self.expiring_policies_on(Local::now().date_naive())
    }

    // ------------------------------------------------------------------
    // Claims
    // ------------------------------------------------------------------

    /// Files a claim from a draft, minting the next claim id.
    ///
    /// The rule chain runs in a fixed order and stops at the first failure:
    ///
    /// 1. the referenced client exists;
    /// 2. the referenced policy exists;
    /// 3. the loss date is on or before the policy expiry;
    /// 4. the draft amount plus all prior claims against the policy stays
    ///    within the policy's coverage limit.
    ///
    /// The claim id is minted only after the whole chain passes, so a
    /// rejected draft never consumes an id.
    pub fn file_claim(&mut self, draft: ClaimDraft) -> BookResult<ClaimId> {
        if !self.clients.contains(&draft.client_id) {
            return Err(ClaimError::unknown_client(&draft.client_id).into());
        }
        let policy = self
            .policies
            .get(&draft.policy_id)
            .ok_or_else(|| ClaimError::unknown_policy(&draft.policy_id))?;
        if draft.date > policy.expiry {
            return Err(ClaimError::FiledAfterExpiry {
                date: draft.date,
                expiry: policy.expiry,
            }
            .into());
        }
        let prior_total = self.claims.total_claimed_against(&draft.policy_id);
        if prior_total + draft.amount.value() > policy.coverage_limit.value() {
            return Err(ClaimError::LimitExceeded {
                requested: draft.amount.clone(),
                prior_total,
                limit: policy.coverage_limit.clone(),
            }
            .into());
        }

        let id = self.claim_ids.mint();
        self.claims.add(Claim::file(id.clone(), draft))?;
        Ok(id)
    }

    pub fn remove_claim(&mut self, id: &ClaimId) -> BookResult<Claim> {
        Ok(self.claims.remove(id)?)
    }

    pub fn find_claim(&self, id: &ClaimId) -> Option<&Claim> {
        self.claims.get(id)
    }

    /// All claims in filing order
    pub fn claims(&self) -> impl Iterator<Item = &Claim> {
        self.claims.iter()
    }

    /// Claims filed against one policy, in filing order
    pub fn claims_against<'a>(&'a self, policy_id: &'a PolicyId) -> impl Iterator<Item = &'a Claim> {
        self.claims.against_policy(policy_id)
    }

    /// Sum of the amounts claimed against one policy
    pub fn total_claimed_against(&self, policy_id: &PolicyId) -> Decimal {
        self.claims.total_claimed_against(policy_id)
    }

    // ------------------------------------------------------------------
    // Counters and snapshot support
    // ------------------------------------------------------------------

    /// The next policy number the book would mint
    pub fn next_policy_number(&self) -> u64 {
        self.policy_ids.next_value()
    }

    /// The next claim number the book would mint
    pub fn next_claim_number(&self) -> u64 {
        self.claim_ids.next_value()
    }

    /// Rebuilds both counters from persisted values.
    ///
    /// Each counter is additionally advanced past the highest numeric suffix
    /// present among the loaded entities, so a snapshot whose counters lag
    /// behind its own records can never cause an id collision.
    pub fn restore_counters(&mut self, next_policy: u64, next_claim: u64) {
        self.policy_ids = IdSequence::starting_at(next_policy);
        self.claim_ids = IdSequence::starting_at(next_claim);
        for policy in self.policies.iter() {
            self.policy_ids.advance_past(&policy.id);
        }
        for claim in self.claims.iter() {
            self.claim_ids.advance_past(&claim.id);
        }
    }

    /// Inserts an already-issued policy under its persisted id.
    ///
    /// Used when rebuilding a book from a snapshot; uniqueness rules still
    /// apply but referential rules are not re-run, since a snapshot may
    /// legitimately contain references to since-removed entities.
    pub fn insert_policy(&mut self, policy: Policy) -> BookResult<()> {
        self.policies.add(policy)?;
        Ok(())
    }

    /// Inserts an already-filed claim under its persisted id
    ///
    /// Snapshot counterpart of [`Book::file_claim`]; the filing chain is not
    /// re-run.
    pub fn insert_claim(&mut self, claim: Claim) -> BookResult<()> {
        self.claims.add(claim)?;
        Ok(())
    }
}
