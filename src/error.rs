// src/error.rs
//! Failure taxonomy. None of these abort a crawl: each is logged where it
//! happens and turned into an absent result for the team being resolved.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP error (status {status}) for {url}")]
    Status { status: u16, url: String },

    #[error("Image decode failed for {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: image::ImageError,
    },

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

#[derive(Error, Debug, PartialEq)]
pub enum DmsError {
    #[error("Not a degree/minute/second value: {0:?}")]
    NoMatch(String),

    #[error("Bad number {0:?} in coordinate")]
    BadNumber(String),

    #[error("Need a latitude and a longitude, found {0} value(s)")]
    Incomplete(usize),

    #[error("Coordinate out of range: {lat}, {lon}")]
    OutOfRange { lat: f64, lon: f64 },
}

#[derive(Error, Debug)]
pub enum RunError {
    #[error("Could not fetch the club list at {0}")]
    HubUnavailable(url::Url),

    #[error("Could not write output: {0}")]
    Output(#[from] std::io::Error),
}
