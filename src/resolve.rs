// src/resolve.rs
//! Per-club resolution: club page → colours → location.
//!
//! Location search is breadth-first and bounded by `MAX_SEARCH_DEPTH`:
//! - depth 1: the club page's candidates, each checked for a coordinate;
//! - depth 2: for each depth-1 candidate in order, its own candidates.
//!
//! The first coordinate found ends the search. Pages are memoised for the
//! lifetime of one [`Resolver`], which is created per club.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use scraper::Html;
use url::Url;

use crate::colour::Palette;
use crate::config::consts::MAX_SEARCH_DEPTH;
use crate::coords::Coordinate;
use crate::core::{Fetch, first_successful};
use crate::specs::club::{extract_colours, extract_coordinate, location_candidates};
use crate::specs::hub::TeamReference;

/// What was found for one club.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExtractionResult {
    pub colours: Option<Palette>,
    pub location: Option<Coordinate>,
}

/// Terminal state of one club.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    Resolved { colours: Palette, location: Coordinate },
    ColourMissing,
    LocationMissing,
}

impl ExtractionResult {
    /// Missing colours take precedence over a missing (or present) location.
    pub fn outcome(self) -> Outcome {
        match (self.colours, self.location) {
            (None, _) => Outcome::ColourMissing,
            (Some(_), None) => Outcome::LocationMissing,
            (Some(colours), Some(location)) => Outcome::Resolved { colours, location },
        }
    }
}

pub struct Resolver<'f, F: Fetch + ?Sized> {
    fetch: &'f F,
    pages: RefCell<HashMap<Url, Option<Rc<Html>>>>,
}

impl<'f, F: Fetch + ?Sized> Resolver<'f, F> {
    pub fn new(fetch: &'f F) -> Self {
        Self { fetch, pages: RefCell::new(HashMap::new()) }
    }

    /// Fetch once per URL; failures are remembered too.
    fn page(&self, url: &Url) -> Option<Rc<Html>> {
        if let Some(hit) = self.pages.borrow().get(url) {
            return hit.clone();
        }
        let doc = self.fetch.page(url).map(Rc::new);
        self.pages.borrow_mut().insert(url.clone(), doc.clone());
        doc
    }

    fn coordinate_at(&self, url: &Url) -> Option<Coordinate> {
        extract_coordinate(&*self.page(url)?)
    }

    fn candidates_at(&self, url: &Url) -> Vec<Url> {
        self.page(url)
            .map(|doc| location_candidates(&doc, url))
            .unwrap_or_default()
    }

    fn first_coordinate(&self, urls: &[Url]) -> Option<Coordinate> {
        first_successful(urls.iter().map(|url| move || self.coordinate_at(url)))
    }

    /// Bounded search for a coordinate starting from `roots`.
    pub fn find_location(&self, roots: Vec<Url>) -> Option<Coordinate> {
        if let Some(found) = self.first_coordinate(&roots) {
            logd!("Coordinate at depth 1");
            return Some(found);
        }

        let mut frontier = roots;
        for depth in 2..=MAX_SEARCH_DEPTH {
            let mut next = Vec::new();
            for parent in &frontier {
                let children = self.candidates_at(parent);
                if let Some(found) = self.first_coordinate(&children) {
                    logd!("Coordinate at depth {depth} via {parent}");
                    return Some(found);
                }
                next.extend(children);
            }
            frontier = next;
        }
        None
    }

    /// Colours first; without them the location is not searched for.
    pub fn resolve(&self, team: &TeamReference) -> ExtractionResult {
        let Some(page) = self.page(&team.page) else {
            return ExtractionResult::default();
        };

        let colours = extract_colours(&page, &team.page, self.fetch);
        if colours.is_none() {
            return ExtractionResult::default();
        }

        let location = self.find_location(location_candidates(&page, &team.page));
        ExtractionResult { colours, location }
    }
}

/// Resolve one club with a fresh page memo.
pub fn resolve_team<F: Fetch + ?Sized>(fetch: &F, team: &TeamReference) -> Outcome {
    let outcome = Resolver::new(fetch).resolve(team).outcome();
    logf!("{} ({}): {:?}", team.name, team.page, outcome);
    outcome
}
