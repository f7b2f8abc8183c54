// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific knowledge: where the facts live in the markup and how to read them.
//!
//! - `hub`  – the club list: one `TeamReference` per row header link, with its country.
//! - `club` – a club page: kit colours, location candidates, coordinate.
//!
//! Specs only extract. Deciding which pages to fetch, in which order and when to give
//! up is the job of `resolve`.
//!
//! Specs are testable offline: feed them an `Html` parsed from a string.
pub mod club;
pub mod hub;
