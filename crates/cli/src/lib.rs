//! `storefront` command-line driver.
//!
//! Loads a catalog, replays filter and page actions against the storefront
//! engine and prints the resulting view.

pub mod args;
pub mod config;
pub mod render;
pub mod run;

pub use args::{Args, OutputFormat};
pub use config::StorefrontConfig;
pub use run::{CartSummary, Outcome, run};
