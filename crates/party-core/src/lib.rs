//! Business logic for the party activity service.
//!
//! - `provider`: the venues and the `PartyService` trait they implement
//! - `registry`: the startup-built table from `ActivityKey` to invocable
//! - `dispatcher`: resolves request names against the registry and runs them
//!
//! This crate depends only on `party-types` and `tracing` -- no IO.

pub mod dispatcher;
pub mod provider;
pub mod registry;
