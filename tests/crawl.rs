// tests/crawl.rs
//
// Whole-crawl behaviour against an in-memory web.
mod common;

use std::time::Duration;

use club_facts::config::options::RunOptions;
use club_facts::error::RunError;
use club_facts::progress::Progress;
use club_facts::runner::{self, RunSummary};
use common::*;

const KIT: &str = "//upload.wikimedia.org/wikipedia/commons/Kit_body_y.png";
const KIT_URL: &str = "https://upload.wikimedia.org/wikipedia/commons/Kit_body_y.png";

fn opts() -> RunOptions {
    RunOptions { hub: url(&wiki("Hub")), pause: Duration::ZERO, limit: None }
}

fn crawl(web: &MockWeb, opts: &RunOptions) -> (String, RunSummary) {
    let mut out = Vec::new();
    let summary = runner::run(web, opts, &mut out, None).unwrap();
    (String::from_utf8(out).unwrap(), summary)
}

#[derive(Default)]
struct Recorder {
    events: Vec<String>,
}

impl Progress for Recorder {
    fn begin(&mut self, total: usize) { self.events.push(format!("begin {total}")); }
    fn item_done(&mut self, name: &str) { self.events.push(format!("done {name}")); }
    fn item_failed(&mut self, name: &str, reason: &str) { self.events.push(format!("failed {name}: {reason}")); }
    fn finish(&mut self) { self.events.push(s("finish")); }
}

fn s(v: &str) -> String {
    v.to_string()
}

#[test]
fn one_team_end_to_end() {
    let team_page = format!("{}{}", club(Some(KIT), None, Some("Y Park")), geo("10°0′N", "20°0′E"));
    let web = MockWeb::new()
        .with_page(&wiki("Hub"), &hub("CountryX", &["TeamY"]))
        .with_page(&wiki("TeamY"), &team_page)
        .with_image(KIT_URL, uniform(4, 4, 0xff01_0203));

    let (out, summary) = crawl(&web, &opts());

    assert_eq!(out, "CountryX|TeamY|10.0,20.0|rgb(1,2,3)\n");
    assert_eq!(summary, RunSummary { teams: 1, resolved: 1, colour_missing: 0, location_missing: 0 });
    // The club page is its own location candidate and is only fetched once.
    assert_eq!(web.fetched(), vec![wiki("Hub"), wiki("TeamY"), format!("img:{KIT_URL}")]);
}

#[test]
fn colour_missing_wins_over_found_location() {
    // No kit at all, but a perfectly good coordinate on the ground page.
    let web = MockWeb::new()
        .with_page(&wiki("Hub"), &hub("CountryX", &["TeamY"]))
        .with_page(&wiki("TeamY"), &club(None, None, Some(r#"<a href="/wiki/Park">Park</a>"#)))
        .with_page(&wiki("Park"), &place(&[], Some(("1°0′N", "2°0′E"))));

    let (out, summary) = crawl(&web, &opts());

    assert_eq!(out, "Unable to fetch colour for TeamY\n");
    assert_eq!(summary.colour_missing, 1);
    assert_eq!(web.times_fetched(&wiki("Park")), 0);
}

#[test]
fn style_fallback_colours_when_image_fails() {
    let team_page = club(Some(KIT), Some("background-color: #AABBCC/112233;"), Some(r#"<a href="/wiki/Park">Park</a>"#));
    let web = MockWeb::new()
        .with_page(&wiki("Hub"), &hub("CountryX", &["TeamY"]))
        .with_page(&wiki("TeamY"), &team_page)
        .with_page(&wiki("Park"), &place(&[], Some(("51°30′26″N", "0°7′39″W"))));

    let (out, _) = crawl(&web, &opts());

    let fields: Vec<&str> = out.trim_end().split('|').collect();
    assert_eq!(fields[0], "CountryX");
    assert_eq!(fields[1], "TeamY");
    assert_eq!(fields[3], "#AABBCC,#112233");
    let (lat, lon) = fields[2].split_once(',').unwrap();
    assert!((lat.parse::<f64>().unwrap() - 51.5072).abs() < 1e-4);
    assert!((lon.parse::<f64>().unwrap() + 0.1275).abs() < 1e-4);
}

#[test]
fn location_missing_without_ground_row() {
    let web = MockWeb::new()
        .with_page(&wiki("Hub"), &hub("CountryX", &["TeamY"]))
        .with_page(&wiki("TeamY"), &format!("{}{}", club(Some(KIT), None, None), geo("1°0′N", "1°0′E")))
        .with_image(KIT_URL, uniform(1, 1, 0xffffff));

    let (out, summary) = crawl(&web, &opts());

    assert_eq!(out, "Unable to fetch location for TeamY\n");
    assert_eq!(summary.location_missing, 1);
}

#[test]
fn failures_do_not_stop_the_crawl() {
    // TeamA's page is missing entirely; TeamB resolves.
    let team_b = format!("{}{}", club(Some(KIT), None, Some("B Park")), geo("0°30′S", "0°30′W"));
    let web = MockWeb::new()
        .with_page(&wiki("Hub"), &hub("CountryX", &["TeamA", "TeamB"]))
        .with_page(&wiki("TeamB"), &team_b)
        .with_image(KIT_URL, uniform(2, 1, 0x000000));

    let mut out = Vec::new();
    let mut rec = Recorder::default();
    let summary = runner::run(&web, &opts(), &mut out, Some(&mut rec)).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Unable to fetch colour for TeamA\nCountryX|TeamB|-0.5,-0.5|rgb(0,0,0)\n"
    );
    assert_eq!(summary.teams, 2);
    assert_eq!(rec.events, vec![s("begin 2"), s("failed TeamA: no colours"), s("done TeamB"), s("finish")]);
}

#[test]
fn limit_caps_the_number_of_teams() {
    let web = MockWeb::new().with_page(&wiki("Hub"), &hub("CountryX", &["TeamA", "TeamB", "TeamC"]));
    let opts = RunOptions { limit: Some(1), ..opts() };

    let (out, summary) = crawl(&web, &opts);

    assert_eq!(out, "Unable to fetch colour for TeamA\n");
    assert_eq!(summary.teams, 1);
    assert_eq!(web.times_fetched(&wiki("TeamB")), 0);
}

#[test]
fn unreachable_hub_is_an_error() {
    let web = MockWeb::new();
    let mut out = Vec::new();
    let err = runner::run(&web, &opts(), &mut out, None).unwrap_err();
    assert!(matches!(err, RunError::HubUnavailable(_)));
    assert!(out.is_empty());
}
