//! Party activity endpoint.
//!
//! GET /party/{venue}/{activity} - Run one activity and return its text.

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};

use party_core::dispatcher::Dispatched;
use party_observe::attrs;

use crate::state::AppState;

/// GET /party/{venue}/{activity}
///
/// Responds `200 text/plain` with the activity result, or with the fallback
/// message when the venue or activity is unknown, cannot be decoded, or the
/// activity fails.
pub async fn run_activity(
    State(state): State<AppState>,
    path: Result<Path<(String, String)>, PathRejection>,
) -> String {
    respond(&state, path)
}

fn respond(state: &AppState, path: Result<Path<(String, String)>, PathRejection>) -> String {
    let request_id = uuid::Uuid::now_v7().to_string();
    let span = tracing::info_span!(
        "party",
        http.request_id = %request_id,
        party.venue = tracing::field::Empty,
        party.activity = tracing::field::Empty,
        party.outcome = tracing::field::Empty,
    );

    span.in_scope(|| {
        let outcome = match path {
            Ok(Path((venue, activity))) => {
                span.record(attrs::PARTY_VENUE, venue.as_str());
                span.record(attrs::PARTY_ACTIVITY, activity.as_str());
                state.dispatcher.dispatch_outcome(&venue, &activity)
            }
            Err(rejection) => {
                tracing::debug!(error = %rejection, "path segments not decodable");
                Dispatched::fallback()
            }
        };

        let label = if outcome.served {
            attrs::OUTCOME_OK
        } else {
            attrs::OUTCOME_FALLBACK
        };
        span.record(attrs::PARTY_OUTCOME, label);
        outcome.text
    })
}
