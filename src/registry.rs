//! Election registry
//!
//! [`ElectionRegistry`] owns every piece of election state: the voter and
//! candidate rosters, the tally table, the set of voters who have voted and
//! the three ballot logs. It is constructed explicitly and passed to whoever
//! drives it; there is no global instance.
//!
//! Vote casting checks its preconditions in a fixed order and stops at the
//! first failure:
//! 1. the voter has already voted
//! 2. the voter is not registered
//! 3. the candidate is not registered
//!
//! Only when all three pass are the ballot recorded, the voter marked and
//! the tally incremented. None of those steps can fail, so a rejected vote
//! leaves the registry exactly as it was.
//!
//! [`SharedRegistry`] wraps a registry in a single `RwLock` for callers on
//! more than one thread.

use std::collections::{HashMap, HashSet};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use uuid::Uuid;

use crate::ballot_log::{BallotLog, BallotLogs};
use crate::types::{
    Ballot, CandidateId, ElectionSummary, LogStructure, Registration, VoteReceipt, VoteResult,
    VoterId,
};
use crate::{Error, Result};

/// Single-owner election state
#[derive(Debug, Clone, Default)]
pub struct ElectionRegistry {
    voters: Vec<VoterId>,
    voter_index: HashSet<VoterId>,
    candidates: Vec<CandidateId>,
    tallies: HashMap<CandidateId, u64>,
    has_voted: HashSet<VoterId>,
    logs: BallotLogs,
}

impl ElectionRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a voter
    ///
    /// Registering an identifier twice is a no-op reported as
    /// [`Registration::AlreadyRegistered`].
    pub fn register_voter(&mut self, voter_id: &str) -> Registration {
        if self.voter_index.contains(voter_id) {
            tracing::debug!(voter_id, "voter already registered");
            return Registration::AlreadyRegistered;
        }

        self.voter_index.insert(voter_id.to_string());
        self.voters.push(voter_id.to_string());
        tracing::info!(voter_id, roster_size = self.voters.len(), "voter registered");
        Registration::Registered
    }

    /// Register a candidate with a tally of zero
    ///
    /// A duplicate is a no-op and leaves the existing tally alone.
    pub fn register_candidate(&mut self, candidate_id: &str) -> Registration {
        if self.tallies.contains_key(candidate_id) {
            tracing::debug!(candidate_id, "candidate already registered");
            return Registration::AlreadyRegistered;
        }

        self.tallies.insert(candidate_id.to_string(), 0);
        self.candidates.push(candidate_id.to_string());
        tracing::info!(
            candidate_id,
            roster_size = self.candidates.len(),
            "candidate registered"
        );
        Registration::Registered
    }

    /// Cast a vote, recording the ballot in the log for `structure`
    ///
    /// # Errors
    ///
    /// - [`Error::AlreadyVoted`] if the voter has a recorded ballot
    /// - [`Error::UnregisteredVoter`] if the voter is not on the roster
    /// - [`Error::UnregisteredCandidate`] if the candidate is not on the roster
    ///
    /// The checks run in that order.
    pub fn cast_vote(
        &mut self,
        voter_id: &str,
        candidate_id: &str,
        structure: LogStructure,
    ) -> Result<VoteReceipt> {
        if let Err(rejection) = self.check_eligibility(voter_id, candidate_id) {
            tracing::debug!(voter_id, candidate_id, %structure, %rejection, "vote rejected");
            return Err(rejection);
        }

        let ballot = Ballot::new(voter_id, candidate_id);
        self.logs.record(structure, ballot.clone());
        self.has_voted.insert(voter_id.to_string());
        *self.tallies.entry(candidate_id.to_string()).or_insert(0) += 1;

        let sequence = self.has_voted.len() as u64;
        tracing::info!(voter_id, candidate_id, %structure, sequence, "vote accepted");

        Ok(VoteReceipt {
            receipt_id: Uuid::new_v4(),
            ballot,
            structure,
            sequence,
            cast_at: Utc::now(),
        })
    }

    fn check_eligibility(&self, voter_id: &str, candidate_id: &str) -> Result<()> {
        if self.has_voted.contains(voter_id) {
            return Err(Error::already_voted(voter_id));
        }
        if !self.voter_index.contains(voter_id) {
            return Err(Error::unregistered_voter(voter_id));
        }
        if !self.tallies.contains_key(candidate_id) {
            return Err(Error::unregistered_candidate(candidate_id));
        }
        Ok(())
    }

    /// Every candidate with its tally, highest count first
    ///
    /// Candidates with equal counts keep their registration order.
    pub fn results(&self) -> Vec<VoteResult> {
        let mut results: Vec<VoteResult> = self
            .candidates
            .iter()
            .map(|candidate_id| VoteResult {
                candidate_id: candidate_id.clone(),
                vote_count: self.tally(candidate_id).unwrap_or_default(),
            })
            .collect();

        // `sort_by` is stable, which preserves registration order on ties
        results.sort_by(|a, b| b.vote_count.cmp(&a.vote_count));
        results
    }

    /// Ranked results together with log statistics
    pub fn summary(&self) -> ElectionSummary {
        ElectionSummary {
            results: self.results(),
            total_ballots: self.total_votes(),
            log_sizes: self.logs.sizes(),
            generated_at: Utc::now(),
        }
    }

    /// Registered voters in registration order
    pub fn voters(&self) -> &[VoterId] {
        &self.voters
    }

    /// Registered candidates in registration order
    pub fn candidates(&self) -> &[CandidateId] {
        &self.candidates
    }

    pub fn is_voter_registered(&self, voter_id: &str) -> bool {
        self.voter_index.contains(voter_id)
    }

    pub fn is_candidate_registered(&self, candidate_id: &str) -> bool {
        self.tallies.contains_key(candidate_id)
    }

    pub fn has_voted(&self, voter_id: &str) -> bool {
        self.has_voted.contains(voter_id)
    }

    /// Current tally for a candidate, `None` if not registered
    pub fn tally(&self, candidate_id: &str) -> Option<u64> {
        self.tallies.get(candidate_id).copied()
    }

    /// Number of accepted ballots
    pub fn total_votes(&self) -> u64 {
        self.has_voted.len() as u64
    }

    /// The log for one structure
    pub fn log(&self, structure: LogStructure) -> &BallotLog {
        self.logs.get(structure)
    }

    /// All three logs
    pub fn logs(&self) -> &BallotLogs {
        &self.logs
    }
}

/// Thread-safe handle around one [`ElectionRegistry`]
///
/// All precondition checks and side effects of a vote happen under a single
/// write guard, so one voter can never get two ballots in.
#[derive(Debug, Default)]
pub struct SharedRegistry {
    inner: RwLock<ElectionRegistry>,
}

impl SharedRegistry {
    pub fn new(registry: ElectionRegistry) -> Self {
        Self {
            inner: RwLock::new(registry),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, ElectionRegistry>> {
        self.inner
            .read()
            .map_err(|_| Error::internal("Registry read lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, ElectionRegistry>> {
        self.inner
            .write()
            .map_err(|_| Error::internal("Registry write lock poisoned"))
    }

    pub fn register_voter(&self, voter_id: &str) -> Result<Registration> {
        Ok(self.write()?.register_voter(voter_id))
    }

    pub fn register_candidate(&self, candidate_id: &str) -> Result<Registration> {
        Ok(self.write()?.register_candidate(candidate_id))
    }

    pub fn cast_vote(
        &self,
        voter_id: &str,
        candidate_id: &str,
        structure: LogStructure,
    ) -> Result<VoteReceipt> {
        self.write()?.cast_vote(voter_id, candidate_id, structure)
    }

    pub fn results(&self) -> Result<Vec<VoteResult>> {
        Ok(self.read()?.results())
    }

    pub fn summary(&self) -> Result<ElectionSummary> {
        Ok(self.read()?.summary())
    }

    /// Run a read-only query against the registry
    pub fn with_registry<T>(&self, f: impl FnOnce(&ElectionRegistry) -> T) -> Result<T> {
        Ok(f(&*self.read()?))
    }

    /// Take the registry back out of the handle
    pub fn into_inner(self) -> Result<ElectionRegistry> {
        self.inner
            .into_inner()
            .map_err(|_| Error::internal("Registry lock poisoned"))
    }
}
