// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod specs;

pub mod complete;
pub mod output;
pub mod progress;
pub mod query;
pub mod scrape;
pub mod store;
