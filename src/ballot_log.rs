//! Ballot logs
//!
//! Every accepted ballot is appended to exactly one of three logs, chosen by
//! the caller at vote time. The logs differ only in how they order ballots
//! for retrieval:
//!
//! - **Stack**: last in, first out (newest first)
//! - **Queue**: first in, first out (oldest first)
//! - **Linked list**: each ballot becomes the new head of a singly linked
//!   chain, so traversal from the head is newest first
//!
//! Ordering never affects tallying or voting eligibility.

use std::collections::VecDeque;
use std::collections::vec_deque;
use std::iter::Rev;
use std::slice;

use crate::types::{Ballot, LogSizes, LogStructure};

/// A node of the linked chain. `next` points at the next older node.
#[derive(Debug, Clone)]
struct ChainNode {
    ballot: Ballot,
    next: Option<usize>,
}

/// Singly linked chain of ballots stored in an arena.
///
/// Nodes are never removed, so indices stay valid for the life of the chain.
#[derive(Debug, Clone, Default)]
pub struct BallotChain {
    nodes: Vec<ChainNode>,
    head: Option<usize>,
}

impl BallotChain {
    /// Create an empty chain
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a ballot as the new head
    pub fn push_front(&mut self, ballot: Ballot) {
        let index = self.nodes.len();
        self.nodes.push(ChainNode {
            ballot,
            next: self.head,
        });
        self.head = Some(index);
    }

    /// Ballot at the head of the chain
    pub fn head(&self) -> Option<&Ballot> {
        self.head.map(|index| &self.nodes[index].ballot)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Walk the chain from the head
    pub fn iter(&self) -> ChainIter<'_> {
        ChainIter {
            nodes: &self.nodes,
            cursor: self.head,
        }
    }
}

/// Iterator following `next` links from the head of a [`BallotChain`]
pub struct ChainIter<'a> {
    nodes: &'a [ChainNode],
    cursor: Option<usize>,
}

impl<'a> Iterator for ChainIter<'a> {
    type Item = &'a Ballot;

    fn next(&mut self) -> Option<Self::Item> {
        let nodes = self.nodes;
        let node = &nodes[self.cursor?];
        self.cursor = node.next;
        Some(&node.ballot)
    }
}

/// One ballot log, in one of the three storage disciplines
#[derive(Debug, Clone)]
pub enum BallotLog {
    Stack(Vec<Ballot>),
    Queue(VecDeque<Ballot>),
    LinkedList(BallotChain),
}

impl BallotLog {
    /// Create an empty log for the given structure
    pub fn new(structure: LogStructure) -> Self {
        match structure {
            LogStructure::Stack => Self::Stack(Vec::new()),
            LogStructure::Queue => Self::Queue(VecDeque::new()),
            LogStructure::LinkedList => Self::LinkedList(BallotChain::new()),
        }
    }

    /// Which structure this log uses
    pub fn structure(&self) -> LogStructure {
        match self {
            Self::Stack(_) => LogStructure::Stack,
            Self::Queue(_) => LogStructure::Queue,
            Self::LinkedList(_) => LogStructure::LinkedList,
        }
    }

    /// Append a ballot using the structure's native insertion discipline
    pub fn record(&mut self, ballot: Ballot) {
        match self {
            Self::Stack(stack) => stack.push(ballot),
            Self::Queue(queue) => queue.push_back(ballot),
            Self::LinkedList(chain) => chain.push_front(ballot),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Stack(stack) => stack.len(),
            Self::Queue(queue) => queue.len(),
            Self::LinkedList(chain) => chain.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The ballot that would be retrieved first
    ///
    /// Top of the stack, front of the queue, or head of the chain.
    pub fn peek(&self) -> Option<&Ballot> {
        match self {
            Self::Stack(stack) => stack.last(),
            Self::Queue(queue) => queue.front(),
            Self::LinkedList(chain) => chain.head(),
        }
    }

    /// Ballots in retrieval order
    pub fn iter(&self) -> Iter<'_> {
        match self {
            Self::Stack(stack) => Iter::Stack(stack.iter().rev()),
            Self::Queue(queue) => Iter::Queue(queue.iter()),
            Self::LinkedList(chain) => Iter::LinkedList(chain.iter()),
        }
    }

    /// Whether this log holds a ballot from the given voter
    pub fn contains_voter(&self, voter_id: &str) -> bool {
        self.iter().any(|ballot| ballot.voter_id == voter_id)
    }
}

/// Retrieval-order iterator over any [`BallotLog`]
pub enum Iter<'a> {
    Stack(Rev<slice::Iter<'a, Ballot>>),
    Queue(vec_deque::Iter<'a, Ballot>),
    LinkedList(ChainIter<'a>),
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Ballot;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Stack(iter) => iter.next(),
            Self::Queue(iter) => iter.next(),
            Self::LinkedList(iter) => iter.next(),
        }
    }
}

impl<'a> IntoIterator for &'a BallotLog {
    type Item = &'a Ballot;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The three ballot logs, one per [`LogStructure`]
#[derive(Debug, Clone)]
pub struct BallotLogs {
    logs: [BallotLog; 3],
}

impl Default for BallotLogs {
    fn default() -> Self {
        Self::new()
    }
}

impl BallotLogs {
    pub fn new() -> Self {
        Self {
            logs: LogStructure::ALL.map(BallotLog::new),
        }
    }

    fn slot(structure: LogStructure) -> usize {
        structure.menu_number() - 1
    }

    /// The log for a structure
    pub fn get(&self, structure: LogStructure) -> &BallotLog {
        &self.logs[Self::slot(structure)]
    }

    /// Append a ballot to the log for `structure`
    pub fn record(&mut self, structure: LogStructure, ballot: Ballot) {
        self.logs[Self::slot(structure)].record(ballot);
    }

    /// All logs in menu order
    pub fn iter(&self) -> impl Iterator<Item = &BallotLog> {
        self.logs.iter()
    }

    /// Ballots held across all logs
    pub fn total(&self) -> usize {
        self.logs.iter().map(BallotLog::len).sum()
    }

    pub fn sizes(&self) -> LogSizes {
        LogSizes {
            stack: self.get(LogStructure::Stack).len(),
            queue: self.get(LogStructure::Queue).len(),
            linked_list: self.get(LogStructure::LinkedList).len(),
        }
    }

    /// The structure whose log holds the voter's ballot, if any
    pub fn locate_voter(&self, voter_id: &str) -> Option<LogStructure> {
        self.logs
            .iter()
            .find(|log| log.contains_voter(voter_id))
            .map(BallotLog::structure)
    }
}
