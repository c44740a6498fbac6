//! HTTP request handlers.

pub mod party;
