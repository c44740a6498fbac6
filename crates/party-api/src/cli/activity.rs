//! Activity CLI commands: list, call.
//!
//! Each command renders its output to a `String`; `main` prints it.

use std::fmt::Write as _;

use anyhow::Result;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;

use crate::state::AppState;

/// Render every registered key as a table, or as a JSON array of
/// `venue:activity` strings.
pub fn list_activities(state: &AppState, json: bool) -> Result<String> {
    let keys = state.dispatcher.registry().keys();

    if json {
        let names: Vec<String> = keys.iter().map(ToString::to_string).collect();
        return Ok(serde_json::to_string_pretty(&names)?);
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Venue").fg(Color::White),
        Cell::new("Activity").fg(Color::White),
        Cell::new("Route").fg(Color::White),
    ]);

    for key in &keys {
        table.add_row(vec![
            Cell::new(key.venue.to_string()).fg(Color::Cyan),
            Cell::new(key.activity.to_string()),
            Cell::new(format!("/party/{}/{}", key.venue, key.activity)).fg(Color::DarkGrey),
        ]);
    }

    let mut out = String::new();
    writeln!(out)?;
    writeln!(out, "{table}")?;
    writeln!(out)?;
    writeln!(
        out,
        "  {} activit{}",
        style(keys.len()).bold(),
        if keys.len() == 1 { "y" } else { "ies" }
    )?;
    Ok(out)
}

/// Dispatch one activity and render what an HTTP client would receive.
pub fn call_activity(state: &AppState, venue: &str, activity: &str, json: bool) -> Result<String> {
    let outcome = state.dispatcher.dispatch_outcome(venue, activity);

    if json {
        return Ok(serde_json::json!({
            "venue": venue,
            "activity": activity,
            "ok": outcome.served,
            "result": outcome.text,
        })
        .to_string());
    }

    Ok(outcome.text)
}
