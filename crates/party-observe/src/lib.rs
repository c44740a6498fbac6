//! Observability for the party service: subscriber setup and the span
//! field names shared by the dispatcher and the HTTP layer.

pub mod attrs;
pub mod tracing_setup;
