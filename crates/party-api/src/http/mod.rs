//! HTTP layer for the party service.
//!
//! Axum-based. The only application route is
//! `GET /party/{venue}/{activity}`, which always answers `200` with a
//! plain-text body.

pub mod handlers;
pub mod router;
