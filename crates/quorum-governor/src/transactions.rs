//! Proposed outbound calls and their per-transaction vote bookkeeping.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use quorum_types::Address;

/// A proposed outbound call.
///
/// Immutable history once executed; transactions are never deleted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u64,
    pub destination: Address,
    pub value: u128,
    pub data: Vec<u8>,
    pub executed: bool,
    voters: BTreeSet<Address>,
}

impl Transaction {
    /// Number of distinct recorded votes.
    pub fn total_votes(&self) -> u32 {
        self.voters.len() as u32
    }

    /// Whether `account` has voted for this transaction.
    pub fn has_voted(&self, account: &Address) -> bool {
        self.voters.contains(account)
    }

    pub(crate) fn record_vote(&mut self, account: Address) -> bool {
        self.voters.insert(account)
    }
}

/// All pending and historical transactions, keyed by id.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TransactionPool {
    transactions: BTreeMap<u64, Transaction>,
    next_id: u64,
}

impl TransactionPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// The id the next proposal will receive.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Record a new transaction with the proposer's vote as vote #1.
    pub fn insert(
        &mut self,
        destination: Address,
        value: u128,
        data: Vec<u8>,
        proposer: Address,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        let mut voters = BTreeSet::new();
        voters.insert(proposer);
        self.transactions.insert(
            id,
            Transaction {
                id,
                destination,
                value,
                data,
                executed: false,
                voters,
            },
        );
        id
    }

    pub fn get(&self, id: u64) -> Option<&Transaction> {
        self.transactions.get(&id)
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut Transaction> {
        self.transactions.get_mut(&id)
    }

    /// Number of transactions ever proposed.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
