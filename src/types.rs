//! # Core Types for the Election Simulator
//!
//! Plain data shared by the registry, the ballot logs and the shell.
//!
//! ## Type Categories
//!
//! - [`Ballot`]: an accepted (voter, candidate) pairing
//! - [`LogStructure`]: which ballot log a vote is recorded in
//! - [`Registration`]: outcome of registering a voter or candidate
//! - [`VoteReceipt`]: what the caller gets back for an accepted vote
//! - [`VoteResult`] / [`ElectionSummary`]: ranked tallies for reporting
//!
//! ## Usage Examples
//!
//! ```rust
//! use election_sim::types::{Ballot, LogStructure};
//!
//! let ballot = Ballot::new("alice", "bob");
//! assert_eq!(ballot.voter_id, "alice");
//!
//! let structure: LogStructure = "2".parse().unwrap();
//! assert_eq!(structure, LogStructure::Queue);
//! assert_eq!(structure.to_string(), "Queue");
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Error;

/// Opaque voter identifier. Any string is legal, including the empty string.
pub type VoterId = String;

/// Opaque candidate identifier. Any string is legal, including the empty string.
pub type CandidateId = String;

/// An accepted vote
///
/// A `Ballot` is created exactly once per voter, at the moment that voter's
/// vote is accepted, and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ballot {
    /// Voter who cast the ballot
    pub voter_id: VoterId,

    /// Candidate the ballot counts towards
    pub candidate_id: CandidateId,
}

impl Ballot {
    /// Create a new ballot
    pub fn new(voter_id: impl Into<VoterId>, candidate_id: impl Into<CandidateId>) -> Self {
        Self {
            voter_id: voter_id.into(),
            candidate_id: candidate_id.into(),
        }
    }
}

impl fmt::Display for Ballot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' -> '{}'", self.voter_id, self.candidate_id)
    }
}

/// Storage discipline used to record a ballot
///
/// The choice only affects the internal order of the chosen log. It never
/// changes eligibility or tallies.
///
/// # Parsing
///
/// Accepts the shell's menu numbers (`1`, `2`, `3`) as well as the names,
/// case-insensitively:
///
/// ```rust
/// use election_sim::types::LogStructure;
///
/// assert_eq!("1".parse::<LogStructure>().unwrap(), LogStructure::Stack);
/// assert_eq!("Linked List".parse::<LogStructure>().unwrap(), LogStructure::LinkedList);
/// assert!("4".parse::<LogStructure>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogStructure {
    /// Last-in-first-out
    Stack,
    /// First-in-first-out
    Queue,
    /// Singly linked chain, newest ballot at the head
    LinkedList,
}

impl LogStructure {
    /// Every structure, in menu order
    pub const ALL: [LogStructure; 3] = [Self::Stack, Self::Queue, Self::LinkedList];

    /// Human-readable name, as shown in the shell
    pub fn name(&self) -> &'static str {
        match self {
            Self::Stack => "Stack",
            Self::Queue => "Queue",
            Self::LinkedList => "Linked List",
        }
    }

    /// 1-based position in the shell's structure menu
    pub fn menu_number(&self) -> usize {
        match self {
            Self::Stack => 1,
            Self::Queue => 2,
            Self::LinkedList => 3,
        }
    }
}

impl fmt::Display for LogStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LogStructure {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['_', '-', ' '], "");
        match normalized.as_str() {
            "1" | "stack" => Ok(Self::Stack),
            "2" | "queue" => Ok(Self::Queue),
            "3" | "linkedlist" | "list" => Ok(Self::LinkedList),
            _ => Err(Error::unknown_structure(s)),
        }
    }
}

/// Outcome of registering a voter or candidate
///
/// Duplicate registration is informational, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Registration {
    /// The identifier was added to the roster
    Registered,
    /// The identifier was already present; nothing changed
    AlreadyRegistered,
}

impl Registration {
    /// Whether the roster grew
    pub fn is_new(&self) -> bool {
        matches!(self, Self::Registered)
    }
}

/// Confirmation handed back for an accepted vote
///
/// Receipts are not retained by the registry; the ballot itself lives in the
/// log named by `structure`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoteReceipt {
    /// Random identifier for this confirmation
    pub receipt_id: Uuid,

    /// The ballot that was recorded
    pub ballot: Ballot,

    /// Log the ballot was appended to
    pub structure: LogStructure,

    /// 1-based acceptance order across all logs
    pub sequence: u64,

    /// When the vote was accepted
    pub cast_at: DateTime<Utc>,
}

impl fmt::Display for VoteReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Voter '{}' voted for candidate '{}' using {}.",
            self.ballot.voter_id, self.ballot.candidate_id, self.structure
        )
    }
}

/// Tally for a single candidate
///
/// ```rust
/// use election_sim::types::VoteResult;
///
/// let result = VoteResult {
///     candidate_id: "X".to_string(),
///     vote_count: 3,
/// };
/// assert_eq!(result.to_string(), "Candidate 'X': 3 votes");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteResult {
    /// Registered candidate identifier
    pub candidate_id: CandidateId,

    /// Number of accepted ballots for this candidate
    pub vote_count: u64,
}

impl fmt::Display for VoteResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Candidate '{}': {} votes", self.candidate_id, self.vote_count)
    }
}

/// Number of ballots held by each log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LogSizes {
    pub stack: usize,
    pub queue: usize,
    pub linked_list: usize,
}

impl LogSizes {
    /// Sum over all three logs
    pub fn total(&self) -> usize {
        self.stack + self.queue + self.linked_list
    }
}

/// Serializable snapshot of the election state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElectionSummary {
    /// Ranked results, as returned by the registry
    pub results: Vec<VoteResult>,

    /// Number of voters who have cast a ballot
    pub total_ballots: u64,

    /// Per-log ballot counts
    pub log_sizes: LogSizes,

    /// When the snapshot was taken
    pub generated_at: DateTime<Utc>,
}
