// src/config/consts.rs

// Net config
pub const HUB_URL: &str =
    "https://en.wikipedia.org/wiki/List_of_top-division_football_clubs_in_UEFA_countries";
pub const USER_AGENT: &str = concat!("club_facts/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// Crawl
pub const TEAM_PAUSE_MS: u64 = 1_000; // be polite
pub const MAX_SEARCH_DEPTH: usize = 2;

// Palette
pub const DOMINANT_SHARE: f64 = 0.25;
pub const PALETTE_CAP: usize = 3;
pub const STYLE_CAP: usize = 2;

// Local log
pub const LOG_FILE: &str = ".store/club_facts.log";
