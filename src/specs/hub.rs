// src/specs/hub.rs
//! Scraping *spec* for the hub page (the list of clubs).
//!
//! Purpose:
//! - Every `table.wikitable` is one country's club list.
//! - The country is the nearest preceding level-3 heading of the table.
//! - Each `th[scope=row] a` inside the table is one club: its text is the club name,
//!   its `href` the club page.
//!
//! Headings come in two shapes:
//! - `<h3><span class="mw-headline">Albania</span></h3>` (older markup)
//! - `<div class="mw-heading mw-heading3"><h3 id="Albania">Albania</h3></div>`

use scraper::{ElementRef, Html};
use url::Url;

use crate::core::html::{attr, first, has_class, is_tag, prev_elements, text};
use crate::core::net::resolve;

selector!(TABLES = "table.wikitable");
selector!(ROW_LINKS = "th[scope='row'] a");
selector!(HEADLINE = ".mw-headline");
selector!(H3 = "h3");

/// One club as listed on the hub page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeamReference {
    pub country: Option<String>,
    pub name: String,
    pub page: Url,
}

/// All clubs on the hub page, in document order.
pub fn extract_teams(doc: &Html, base: &Url) -> Vec<TeamReference> {
    let mut out = Vec::new();

    for table in doc.select(&TABLES) {
        let country = country_of(table);

        for link in table.select(&ROW_LINKS) {
            let Some(href) = attr(link, "href") else {
                logd!("Row link without href in {:?} table", country);
                continue;
            };
            match resolve(base, href) {
                Ok(page) => out.push(TeamReference {
                    country: country.clone(),
                    name: text(link),
                    page,
                }),
                Err(e) => loge!("Skipping club link: {e}"),
            }
        }
    }
    out
}

/// Headline of the nearest level-3 heading before `table`.
fn country_of(table: ElementRef<'_>) -> Option<String> {
    let h3 = prev_elements(table).find_map(heading3)?;
    let headline = first(h3, &HEADLINE).map(text).unwrap_or_else(|| text(h3));
    (!headline.is_empty()).then_some(headline)
}

fn heading3(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    if is_tag(el, "h3") {
        Some(el)
    } else if is_tag(el, "div") && has_class(el, "mw-heading3") {
        first(el, &H3)
    } else {
        None
    }
}
