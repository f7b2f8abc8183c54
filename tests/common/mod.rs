// tests/common/mod.rs
//
// In-memory web for driving the crawler offline. Every fetch is recorded.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;

use club_facts::colour::PixelGrid;
use club_facts::core::Fetch;
use scraper::Html;
use url::Url;

pub const WIKI: &str = "https://en.wikipedia.org/wiki/";

pub fn wiki(page: &str) -> String {
    format!("{WIKI}{page}")
}

pub fn url(s: &str) -> Url {
    Url::parse(s).unwrap()
}

#[derive(Default)]
pub struct MockWeb {
    pages: HashMap<String, String>,
    images: HashMap<String, PixelGrid>,
    log: RefCell<Vec<String>>,
}

impl MockWeb {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: &str, html: &str) -> Self {
        self.pages.insert(url.to_string(), html.to_string());
        self
    }

    pub fn with_image(mut self, url: &str, grid: PixelGrid) -> Self {
        self.images.insert(url.to_string(), grid);
        self
    }

    /// Every URL asked for, in order (images prefixed with `img:`).
    pub fn fetched(&self) -> Vec<String> {
        self.log.borrow().clone()
    }

    pub fn times_fetched(&self, url: &str) -> usize {
        self.log.borrow().iter().filter(|u| *u == url).count()
    }
}

impl Fetch for MockWeb {
    fn page(&self, url: &Url) -> Option<Html> {
        self.log.borrow_mut().push(url.to_string());
        self.pages.get(url.as_str()).map(|body| Html::parse_document(body))
    }

    fn image(&self, url: &Url) -> Option<PixelGrid> {
        self.log.borrow_mut().push(format!("img:{url}"));
        self.images.get(url.as_str()).cloned()
    }
}

pub fn uniform(width: u32, height: u32, packed: u32) -> PixelGrid {
    PixelGrid::new(width, height, vec![packed; (width * height) as usize]).unwrap()
}

pub fn hub(country: &str, teams: &[&str]) -> String {
    let rows: String = teams
        .iter()
        .map(|t| format!(r#"<tr><th scope="row"><a href="/wiki/{t}">{t}</a></th><td>…</td></tr>"#))
        .collect();
    format!(
        r#"<h2>Clubs</h2>
        <h3><span class="mw-headline">{country}</span></h3>
        <table class="wikitable"><tr><th scope="col">Club</th><th>Ground</th></tr>{rows}</table>"#
    )
}

/// Info box with an optional kit image, optional style fallback, and a ground cell.
pub fn club(kit_image: Option<&str>, kit_style: Option<&str>, ground_cell: Option<&str>) -> String {
    let ground = ground_cell
        .map(|cell| format!(r#"<tr><th class="infobox-label">Ground</th><td>{cell}</td></tr>"#))
        .unwrap_or_default();
    let image = kit_image
        .map(|src| format!(r#"<div><img src="{src}"></div>"#))
        .unwrap_or_default();
    let style = kit_style
        .map(|style| {
            format!(r#"<div style="{style}"></div><div><img src="//upload.wikimedia.org/Kit_body.svg"></div>"#)
        })
        .unwrap_or_default();
    format!(
        r#"<table class="infobox">{ground}<tr><td class="toccolours">{image}{style}</td></tr></table>"#
    )
}

pub fn geo(lat: &str, lon: &str) -> String {
    format!(
        r#"<span class="geo-dms"><span class="latitude">{lat}</span> <span class="longitude">{lon}</span></span>"#
    )
}

/// Page with a location row linking to `links` and optionally its own coordinate.
pub fn place(links: &[&str], coordinate: Option<(&str, &str)>) -> String {
    let anchors: String = links.iter().map(|l| format!(r#"<a href="/wiki/{l}">{l}</a> "#)).collect();
    let cell = if links.is_empty() { String::new() } else {
        format!(r#"<table class="infobox"><tr><th class="infobox-label">Location</th><td>{anchors}</td></tr></table>"#)
    };
    let geo = coordinate.map(|(lat, lon)| geo(lat, lon)).unwrap_or_default();
    format!("{cell}{geo}")
}
