// src/lib.rs

#[macro_use]
mod macros;
#[macro_use]
pub mod log;

pub mod colour;
pub mod config;
pub mod coords;
pub mod core;
pub mod error;
pub mod progress;
pub mod resolve;
pub mod runner;
pub mod specs;

#[cfg(feature = "cli")]
pub mod cli;
