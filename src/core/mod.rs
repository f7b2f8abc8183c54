// src/core/mod.rs

pub mod chain;
pub mod html;
pub mod net;
pub mod sanitize;

pub use chain::first_successful;
pub use net::{Fetch, HttpFetcher};
