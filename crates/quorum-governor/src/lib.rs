#![deny(unsafe_code)]
//! Weighted-voting access-control engine.
//!
//! A group of admins collectively governs which accounts may invoke which
//! functions on which external collaborators, and collectively approves
//! the execution of arbitrary outbound calls. Three governance subsystems
//! (admin membership, function roles, pause state) share one weighted
//! voting primitive; proposed transactions carry their own per-id vote
//! bookkeeping and execute exactly once, the moment their threshold is met.
//!
//! This crate provides:
//! - **Role membership** and the per-role admin hierarchy ([`RoleRegistry`]).
//! - **Function thresholds** per (target, selector) ([`FunctionRegistry`]).
//! - **The transaction pool** ([`Transaction`], [`TransactionPool`]).
//! - **The self-call management codec** ([`ManagementCall`]).
//! - **The outbound-call boundary** ([`Dispatcher`], [`RecordingDispatcher`]).
//! - **The facade** wiring it all together ([`Governor`]).

pub mod dispatch;
pub mod functions;
pub mod governor;
pub mod management;
pub mod roles;
pub mod transactions;

// Re-exports for convenience.
pub use dispatch::{DispatchError, DispatchedCall, Dispatcher, RecordingDispatcher};
pub use functions::FunctionRegistry;
pub use governor::{FunctionRoleKey, Governor};
pub use management::ManagementCall;
pub use roles::RoleRegistry;
pub use transactions::{Transaction, TransactionPool};

pub use quorum_types::{Address, GovernorError, GovernorEvent, RoleId, Selector};
pub use quorum_voting::{VoteLedger, VoteOutcome};
