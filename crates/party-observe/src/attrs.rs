//! Span field names for party dispatch instrumentation.
//!
//! Used with `tracing::Span::record` on request spans that declare the
//! fields up front as `tracing::field::Empty`.

/// Venue name as it appeared in the request path.
pub const PARTY_VENUE: &str = "party.venue";

/// Activity name as it appeared in the request path.
pub const PARTY_ACTIVITY: &str = "party.activity";

/// Dispatch outcome: [`OUTCOME_OK`] or [`OUTCOME_FALLBACK`].
pub const PARTY_OUTCOME: &str = "party.outcome";

pub const OUTCOME_OK: &str = "ok";

pub const OUTCOME_FALLBACK: &str = "fallback";
