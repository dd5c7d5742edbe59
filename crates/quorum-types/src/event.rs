//! Notification events emitted by the engine.
//!
//! The engine guarantees that each accepted operation appends its events
//! atomically with the state change; transport of the events is the
//! caller's concern.

use serde::{Deserialize, Serialize};

use crate::ids::{Address, RoleId, Selector};

/// A notification emitted by the governor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GovernorEvent {
    /// `account` became a member of `role`, at the hands of `sender`.
    RoleGranted {
        role: RoleId,
        account: Address,
        sender: Address,
    },
    /// `account` lost membership of `role`.
    RoleRevoked {
        role: RoleId,
        account: Address,
        sender: Address,
    },
    /// The administering role of `role` changed.
    RoleAdminChanged {
        role: RoleId,
        previous_admin: RoleId,
        new_admin: RoleId,
    },
    /// A function was registered for governance.
    FunctionAdded {
        target: Address,
        selector: Selector,
        required_votes: u32,
    },
    /// A function was removed from governance.
    FunctionRemoved { target: Address, selector: Selector },
    /// `account` was granted the derived role of (target, selector).
    FunctionGranted {
        target: Address,
        selector: Selector,
        account: Address,
    },
    /// `account` lost the derived role of (target, selector).
    FunctionRevoked {
        target: Address,
        selector: Selector,
        account: Address,
    },
    /// The required-vote count of a governed function changed.
    RequiredVotesUpdated {
        target: Address,
        selector: Selector,
        required_votes: u32,
    },
    /// An admin-membership campaign reached its threshold.
    AdminGranted { account: Address },
    AdminRevoked { account: Address },
    /// A new outbound call was proposed.
    TransactionProposed {
        id: u64,
        destination: Address,
        value: u128,
        data: Vec<u8>,
    },
    /// A vote was recorded for a pending transaction.
    TransactionApproved {
        id: u64,
        destination: Address,
        total_votes: u32,
    },
    /// A transaction reached its threshold and was executed.
    TransactionExecuted {
        id: u64,
        destination: Address,
        value: u128,
        data: Vec<u8>,
    },
    /// The engine was paused by `account`.
    Paused { account: Address },
    /// The engine resumed; `account` cast the final unpause vote.
    Unpaused { account: Address },
}
