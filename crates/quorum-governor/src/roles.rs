//! Role membership and the per-role admin hierarchy.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};
use tracing::info;

use quorum_types::{Address, RoleId};

/// Membership sets for every role, structural and derived.
///
/// A role with no entry simply has no members; derived roles exist
/// implicitly as soon as the first account is granted. Each role has an
/// administering role, [`RoleId::DEFAULT`] until set, and `DEFAULT` itself
/// never has members.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RoleRegistry {
    members: HashMap<RoleId, BTreeSet<Address>>,
    admins: HashMap<RoleId, RoleId>,
}

impl RoleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `account` is a member of `role`.
    pub fn has_role(&self, role: &RoleId, account: &Address) -> bool {
        self.members
            .get(role)
            .map(|set| set.contains(account))
            .unwrap_or(false)
    }

    /// Number of members of `role`.
    pub fn member_count(&self, role: &RoleId) -> usize {
        self.members.get(role).map(BTreeSet::len).unwrap_or(0)
    }

    /// Add `account` to `role`. Idempotent; returns `true` if membership
    /// actually changed.
    pub fn grant(&mut self, role: RoleId, account: Address) -> bool {
        let changed = self.members.entry(role).or_default().insert(account);
        if changed {
            info!(role = %role, account = %account, "role granted");
        }
        changed
    }

    /// Remove `account` from `role`. Returns `true` if the pair existed.
    pub fn revoke(&mut self, role: &RoleId, account: &Address) -> bool {
        let changed = self
            .members
            .get_mut(role)
            .map(|set| set.remove(account))
            .unwrap_or(false);
        if changed {
            info!(role = %role, account = %account, "role revoked");
        }
        changed
    }

    /// The role administering `role` ([`RoleId::DEFAULT`] when unset).
    pub fn role_admin(&self, role: &RoleId) -> RoleId {
        self.admins.get(role).copied().unwrap_or(RoleId::DEFAULT)
    }

    /// Set the administering role of `role`, returning the previous one.
    pub fn set_role_admin(&mut self, role: RoleId, admin_role: RoleId) -> RoleId {
        let previous = self.role_admin(&role);
        self.admins.insert(role, admin_role);
        previous
    }
}
