#![deny(unsafe_code)]
//! Core types shared across the quorum governor workspace.
//!
//! This crate provides:
//! - **Opaque identifiers** for accounts, callable functions, and roles
//!   ([`Address`], [`Selector`], [`RoleId`]).
//! - **Notification events** emitted by the engine ([`GovernorEvent`]).
//! - **The error taxonomy** for every rejected operation ([`GovernorError`]).

pub mod error;
pub mod event;
pub mod ids;

// Re-exports for convenience.
pub use error::GovernorError;
pub use event::GovernorEvent;
pub use ids::{Address, RoleId, Selector};
