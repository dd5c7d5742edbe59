#![deny(unsafe_code)]
//! Generic weighted-voting primitive shared by every governance subsystem.
//!
//! A [`VoteLedger`] accumulates votes from distinct voters per candidate
//! key. The moment a tally reaches the threshold supplied with the final
//! vote, the ledger clears that tally and reports
//! [`VoteOutcome::ThresholdReached`], so the caller performs the gated
//! action exactly once and a later campaign for the same candidate starts
//! from zero.
//!
//! Voter *qualification* is the caller's concern; the ledger only enforces
//! the dedup and reset invariants.

use std::collections::{BTreeSet, HashMap};
use std::hash::Hash;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use quorum_types::Address;

/// Error returned when a vote cannot be recorded.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum VoteError {
    /// The voter already has a recorded vote for this candidate key.
    #[error("voter has already voted for this candidate")]
    AlreadyVoted,
}

/// Result of casting a vote against a threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VoteOutcome {
    /// The vote was recorded; the campaign continues.
    Recorded { votes: u32 },
    /// This vote crossed the threshold; the tally has been reset and the
    /// bound action must now fire exactly once.
    ThresholdReached { votes: u32 },
}

impl VoteOutcome {
    /// Returns `true` if this vote triggered the gated action.
    pub fn reached(&self) -> bool {
        matches!(self, Self::ThresholdReached { .. })
    }

    /// The vote count observed by this cast.
    pub fn votes(&self) -> u32 {
        match self {
            Self::Recorded { votes } | Self::ThresholdReached { votes } => *votes,
        }
    }
}

/// The accumulating vote record for one candidate key.
///
/// Invariant: the count is always the size of the voter set.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteTally {
    voters: BTreeSet<Address>,
}

impl VoteTally {
    pub fn votes(&self) -> u32 {
        self.voters.len() as u32
    }

    pub fn has_voted(&self, voter: &Address) -> bool {
        self.voters.contains(voter)
    }
}

/// Per-candidate vote accumulation with distinct-voter dedup.
///
/// Generic over the candidate-key type: an account address for admin and
/// pause governance, an (account, target, selector) triple for
/// function-role governance.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct VoteLedger<K: Eq + Hash> {
    tallies: HashMap<K, VoteTally>,
}

impl<K: Eq + Hash + Clone> VoteLedger<K> {
    pub fn new() -> Self {
        Self {
            tallies: HashMap::new(),
        }
    }

    /// Record a vote. Fails if the voter already voted for this key.
    ///
    /// Returns the new vote count.
    pub fn cast(&mut self, key: K, voter: Address) -> Result<u32, VoteError> {
        let tally = self.tallies.entry(key).or_default();
        if !tally.voters.insert(voter) {
            return Err(VoteError::AlreadyVoted);
        }
        Ok(tally.votes())
    }

    /// Record a vote and compare the tally against `threshold`.
    ///
    /// The threshold is supplied fresh by the caller on every cast, so a
    /// mid-campaign change of the governed threshold takes effect on the
    /// next vote. On `count >= threshold` the tally is cleared before the
    /// outcome is returned.
    pub fn cast_with_threshold(
        &mut self,
        key: K,
        voter: Address,
        threshold: u32,
    ) -> Result<VoteOutcome, VoteError> {
        let votes = self.cast(key.clone(), voter)?;
        if votes >= threshold {
            self.tallies.remove(&key);
            debug!(votes, threshold, "vote threshold reached, tally reset");
            return Ok(VoteOutcome::ThresholdReached { votes });
        }
        Ok(VoteOutcome::Recorded { votes })
    }

    /// Current vote count for a key. Absent keys count zero.
    pub fn votes(&self, key: &K) -> u32 {
        self.tallies.get(key).map(VoteTally::votes).unwrap_or(0)
    }

    /// Whether `voter` has a recorded vote for `key`.
    pub fn has_voted(&self, key: &K, voter: &Address) -> bool {
        self.tallies
            .get(key)
            .map(|t| t.has_voted(voter))
            .unwrap_or(false)
    }

    /// Clear the tally for a key so the next campaign starts fresh.
    pub fn reset(&mut self, key: &K) {
        self.tallies.remove(key);
    }
}
