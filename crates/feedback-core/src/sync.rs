//! Request Sequencing
//!
//! One monotonic version counter shared by mutations and list fetches.
//! Out-of-order responses are recognized by their ticket and discarded.

use std::collections::HashMap;

use crate::model::FeedbackId;

/// Issued when a mutation request is sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationTicket {
    pub id: FeedbackId,
    pub version: u64,
}

/// Issued when a list fetch is sent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub version: u64,
}

#[derive(Debug, Clone, Default)]
pub struct SyncTracker {
    next_version: u64,
    /// Latest in-flight mutation per item
    in_flight: HashMap<FeedbackId, u64>,
    last_mutation: u64,
    last_applied_fetch: u64,
}

impl SyncTracker {
    pub fn new() -> Self {
        Self::default()
    }

    fn bump(&mut self) -> u64 {
        self.next_version += 1;
        self.next_version
    }

    pub fn begin_mutation(&mut self, id: &FeedbackId) -> MutationTicket {
        let version = self.bump();
        self.in_flight.insert(id.clone(), version);
        self.last_mutation = version;
        MutationTicket { id: id.clone(), version }
    }

    /// Whether `ticket` is still the newest mutation for its item
    pub fn is_current(&self, ticket: &MutationTicket) -> bool {
        self.in_flight.get(&ticket.id) == Some(&ticket.version)
    }

    /// Settle a mutation response. Returns false for a superseded ticket.
    pub fn settle_mutation(&mut self, ticket: &MutationTicket) -> bool {
        if self.is_current(ticket) {
            self.in_flight.remove(&ticket.id);
            true
        } else {
            false
        }
    }

    pub fn is_pending(&self, id: &FeedbackId) -> bool {
        self.in_flight.contains_key(id)
    }

    pub fn begin_fetch(&mut self) -> FetchTicket {
        FetchTicket { version: self.bump() }
    }

    /// Accept a list response only if it is newer than the last applied
    /// list, no mutation was issued after it started, and nothing is in flight.
    pub fn accept_fetch(&mut self, ticket: FetchTicket) -> bool {
        let stale = ticket.version <= self.last_applied_fetch
            || ticket.version < self.last_mutation
            || !self.in_flight.is_empty();
        if stale {
            return false;
        }
        self.last_applied_fetch = ticket.version;
        true
    }
}
