// src/config/options.rs
use std::time::Duration;

use url::Url;

use super::consts::{HUB_URL, TEAM_PAUSE_MS};

/// Crawl settings. The binary always runs with `RunOptions::default()`;
/// other values exist for driving the runner against an offline fixture.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    /// Page listing the clubs.
    pub hub: Url,
    /// Blocking pause after each team.
    pub pause: Duration,
    /// Stop after this many teams.
    pub limit: Option<usize>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            hub: default_hub(),
            pause: Duration::from_millis(TEAM_PAUSE_MS),
            limit: None,
        }
    }
}

fn default_hub() -> Url {
    // Constant; covered by `default_hub_parses`.
    Url::parse(HUB_URL).expect("HUB_URL is a valid absolute URL")
}
