//! Shared domain types for the party activity service.
//!
//! This crate contains the types used across the workspace: the venues that
//! host a party, the activities they offer, the registry key combining both,
//! configuration, and the associated error types.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod config;
pub mod error;
pub mod party;
