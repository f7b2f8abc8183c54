// src/runner.rs
// Sequential crawl: hub page → clubs → one output line each, with a pause between clubs.

use std::io::Write;
use std::thread;

use crate::config::options::RunOptions;
use crate::core::Fetch;
use crate::error::RunError;
use crate::progress::Progress;
use crate::resolve::{Outcome, resolve_team};
use crate::specs::hub::{TeamReference, extract_teams};

/// Counts per terminal state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub teams: usize,
    pub resolved: usize,
    pub colour_missing: usize,
    pub location_missing: usize,
}

/// `country|name|lat,lon|c1,c2,c3`, or the failure message for the club.
pub fn render(team: &TeamReference, outcome: &Outcome) -> String {
    match outcome {
        Outcome::Resolved { colours, location } => format!(
            "{}|{}|{}|{}\n",
            team.country.as_deref().unwrap_or_default(),
            team.name,
            location,
            colours
        ),
        Outcome::ColourMissing => format!("Unable to fetch colour for {}\n", team.name),
        Outcome::LocationMissing => format!("Unable to fetch location for {}\n", team.name),
    }
}

/// Crawl every club on the hub page, writing one line per club to `out`.
///
/// Only an unreachable hub page or a broken output stream is an error;
/// per-club failures are reported in the club's line.
pub fn run<F: Fetch + ?Sized, W: Write>(
    fetch: &F,
    opts: &RunOptions,
    out: &mut W,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, RunError> {
    let hub = fetch
        .page(&opts.hub)
        .ok_or_else(|| RunError::HubUnavailable(opts.hub.clone()))?;

    let mut teams = extract_teams(&hub, &opts.hub);
    drop(hub);
    if let Some(limit) = opts.limit {
        teams.truncate(limit);
    }

    if let Some(p) = progress.as_deref_mut() {
        p.begin(teams.len());
    }

    let mut summary = RunSummary { teams: teams.len(), ..RunSummary::default() };

    for team in &teams {
        let outcome = resolve_team(fetch, team);
        out.write_all(render(team, &outcome).as_bytes())?;
        out.flush()?;

        match &outcome {
            Outcome::Resolved { .. } => summary.resolved += 1,
            Outcome::ColourMissing => summary.colour_missing += 1,
            Outcome::LocationMissing => summary.location_missing += 1,
        }
        if let Some(p) = progress.as_deref_mut() {
            match &outcome {
                Outcome::Resolved { .. } => p.item_done(&team.name),
                Outcome::ColourMissing => p.item_failed(&team.name, "no colours"),
                Outcome::LocationMissing => p.item_failed(&team.name, "no location"),
            }
        }

        thread::sleep(opts.pause); // be polite
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(summary)
}
