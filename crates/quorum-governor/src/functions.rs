//! The threshold registry: required-vote counts per (target, selector).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use quorum_types::{Address, GovernorError, Selector};

/// Required-vote counts for every governed function.
///
/// A pair with no entry is ungoverned: campaigns and proposals against it
/// cannot resolve a threshold. The read-only query surface reports 0 for
/// absent entries.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FunctionRegistry {
    entries: HashMap<(Address, Selector), u32>,
}

impl FunctionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or update a governed function.
    pub fn set(
        &mut self,
        target: Address,
        selector: Selector,
        required_votes: u32,
    ) -> Result<(), GovernorError> {
        if required_votes < 1 {
            return Err(GovernorError::InvalidThreshold);
        }
        self.entries.insert((target, selector), required_votes);
        Ok(())
    }

    /// Remove a governed function. Returns `true` if an entry existed.
    pub fn remove(&mut self, target: &Address, selector: &Selector) -> bool {
        self.entries.remove(&(*target, *selector)).is_some()
    }

    /// The configured threshold, or `None` when ungoverned.
    pub fn required_votes(&self, target: &Address, selector: &Selector) -> Option<u32> {
        self.entries.get(&(*target, *selector)).copied()
    }

    /// Read-only query surface: absent entries report 0.
    pub fn required_votes_or_zero(&self, target: &Address, selector: &Selector) -> u32 {
        self.required_votes(target, selector).unwrap_or(0)
    }
}
